use vstream_core::pool::{ObjectPool, PoolError};

#[test]
fn acquire_returns_zeroed_object_of_element_size() {
    let pool = ObjectPool::new(24);
    assert_eq!(pool.object_size(), 24);

    let obj = pool.acquire();
    assert_eq!(obj.len(), 24);
    assert!(obj.iter().all(|&b| b == 0));
}

#[test]
fn single_acquire_release_cycle_is_clean() {
    let pool = ObjectPool::new(24);
    let mut obj = pool.acquire();
    obj[0] = 0xAB;
    obj[23] = 0xCD;
    assert!(pool.release(obj).is_ok());

    // fresh objects are zeroed again
    let again = pool.acquire();
    assert!(again.iter().all(|&b| b == 0));
    pool.release(again).unwrap();
    pool.destroy();
}

#[test]
fn release_into_another_pool_is_rejected() {
    let a = ObjectPool::new(8);
    let b = ObjectPool::new(8);

    let obj = a.acquire();
    let (err, obj) = b.release(obj).unwrap_err();
    assert!(matches!(err, PoolError::ForeignObject { .. }));

    // still owned by the caller and releasable where it came from
    assert!(a.release(obj).is_ok());
}

#[test]
fn stats_are_empty() {
    let pool = ObjectPool::with_tag(64, 1024, "entities");
    assert_eq!(pool.object_size(), 64);

    let stats = pool.stats();
    assert_eq!(stats.tag, "<none>");
    assert_eq!((stats.capacity, stats.usage, stats.peak_usage), (0, 0, 0));

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["tag"], "<none>");
    assert_eq!(json["peak_usage"], 0);
}
