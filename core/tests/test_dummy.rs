use std::io::SeekFrom;

use vstream_core::prelude::*;

#[test]
fn forwards_everything_unchanged() {
    let mut region = [0u8; 16];
    let mut d = DummyWrapper::new(Inner::owned(MemoryStream::new(&mut region)));
    assert!(d.is_autoclose());

    assert_eq!(d.write(b"abcd").len, 4);
    assert_eq!(d.tell().unwrap(), 4);
    assert_eq!(d.seek(SeekFrom::Start(1)).unwrap(), 1);

    let mut dst = [0u8; 3];
    assert_eq!(d.read(&mut dst).len, 3);
    assert_eq!(&dst, b"bcd");
    assert_eq!(d.size().unwrap(), 16);
    assert_eq!(d.caps(), Caps::all());
    Box::new(d).close().unwrap();
}

#[test]
fn close_without_autoclose_keeps_inner_usable() {
    let mut region = [0u8; 8];
    let mut mem = MemoryStream::new(&mut region);
    {
        let mut d = DummyWrapper::new(Inner::borrowed(&mut mem));
        assert!(!d.is_autoclose());
        d.write(b"xy");
        Box::new(d).close().unwrap();
    }

    // still open: keep writing through the original handle
    assert_eq!(mem.write(b"z").len, 1);
    mem.seek(SeekFrom::Start(0)).unwrap();
    let mut dst = [0u8; 3];
    mem.read(&mut dst);
    assert_eq!(&dst, b"xyz");
    Box::new(mem).close().unwrap();
}

#[test]
fn read_only_hides_write() {
    let mut region = [9u8; 4];
    let mut d = DummyWrapper::read_only(Inner::owned(MemoryStream::new(&mut region)));

    let t = d.write(b"no");
    assert_eq!(t.len, 0);
    assert!(matches!(t.error(), Some(StreamError::ReadOnly)));
    assert!(!d.caps().contains(Caps::WRITE));

    let mut dst = [0u8; 4];
    assert_eq!(d.read(&mut dst).len, 4);
    assert_eq!(dst, [9u8; 4]);
}

#[test]
fn boxed_streams_compose_as_inner() {
    let data = [1u8, 2, 3];
    let boxed: Box<dyn VStream + '_> = Box::new(ConstMemoryStream::new(&data));
    let mut d = DummyWrapper::new(Inner::from(boxed));
    assert_eq!(d.size().unwrap(), 3);
    assert!(!d.caps().contains(Caps::WRITE));
}
