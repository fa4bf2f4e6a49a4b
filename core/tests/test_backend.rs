use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use sha2::{Digest, Sha256};
use vstream_core::prelude::*;

#[test]
fn memory_stream_is_fixed_size() {
    let mut region = [0u8; 6];
    let mut mem = MemoryStream::new(&mut region);

    let t = mem.write(b"abcdefgh");
    assert_eq!(t.len, 6);
    assert!(t.is_eof());
    assert_eq!(mem.position(), 6);

    assert!(matches!(mem.seek(SeekFrom::Start(7)), Err(StreamError::InvalidSeek { target: 7 })));
    assert!(matches!(mem.seek(SeekFrom::Current(-7)), Err(StreamError::InvalidSeek { target: -1 })));
    assert_eq!(mem.seek(SeekFrom::End(-2)).unwrap(), 4);
    assert_eq!(mem.get_ref(), b"abcdef");
}

#[test]
fn const_memory_refuses_writes() {
    let data = b"fixed";
    let mut mem = ConstMemoryStream::new(data);
    assert!(matches!(mem.write(b"x").error(), Some(StreamError::ReadOnly)));
    assert_eq!(mem.caps(), Caps::READ | Caps::SEEK | Caps::SIZE);

    let mut dst = [0u8; 5];
    assert_eq!(mem.read(&mut dst).len, 5);
    assert_eq!(&dst, data);
}

#[test]
fn io_stream_size_keeps_position() {
    let mut s = IoStream::new(Cursor::new(Vec::new()));
    assert_eq!(s.write(b"0123456789").len, 10);
    s.seek(SeekFrom::Start(3)).unwrap();

    assert_eq!(s.size().unwrap(), 10);
    assert_eq!(s.tell().unwrap(), 3);

    let mut dst = [0u8; 3];
    s.read(&mut dst);
    assert_eq!(&dst, b"345");
    assert_eq!(s.get_ref().get_ref().len(), 10);
}

#[test]
fn io_stream_reports_eof() {
    let mut s = IoStream::new(Cursor::new(b"ab".to_vec()));
    let mut dst = [0u8; 4];
    let t = s.read(&mut dst);
    assert_eq!(t.len, 2);

    let t = s.read(&mut dst);
    assert_eq!(t.len, 0);
    assert!(t.is_eof());

    // empty request is not end of data
    assert!(!s.read(&mut []).is_eof());
}

#[test]
fn reader_stream_cannot_seek() {
    let mut s = ReaderStream::new(io::repeat(7).take(3));
    assert!(matches!(s.seek(SeekFrom::Start(0)), Err(StreamError::NotSeekable)));
    assert!(matches!(s.tell(), Err(StreamError::NotSeekable)));
    assert!(matches!(s.size(), Err(StreamError::Unsupported("size"))));
    assert!(matches!(s.write(b"x").error(), Some(StreamError::ReadOnly)));
    assert_eq!(s.caps(), Caps::READ);
}

#[test]
fn std_adapter_reads_a_window() {
    let data: Vec<u8> = (0..64u8).collect();
    let seg = SegmentWrapper::new(Inner::owned(ConstMemoryStream::new(&data)), 16, 24).unwrap();
    let mut r = StdAdapter::new(seg);
    r.seek(SeekFrom::Start(0)).unwrap();

    let mut out = Vec::new();
    r.read_to_end(&mut out).unwrap();
    assert_eq!(out, (16..24u8).collect::<Vec<_>>());
    r.close().unwrap();
}

#[test]
fn std_adapter_maps_errors() {
    let data = [0u8; 4];
    let mut w = StdAdapter::new(ConstMemoryStream::new(&data));
    let err = w.write(b"x").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Unsupported);

    let err = w.seek(SeekFrom::Start(10)).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn std_adapter_feeds_io_copy() {
    let mut region = vec![0u8; 32];
    {
        let seg = SegmentWrapper::new(Inner::owned(MemoryStream::new(&mut region)), 8, 16).unwrap();
        let mut w = StdAdapter::new(seg);
        w.seek(SeekFrom::Start(0)).unwrap();
        let copied = io::copy(&mut &b"12345678"[..], &mut w).unwrap();
        assert_eq!(copied, 8);
        w.flush().unwrap();
        w.close().unwrap();
    }
    assert_eq!(&region[8..16], b"12345678");
    assert!(region[..8].iter().all(|&b| b == 0));
}

#[test]
fn full_decorator_chain() {
    let file: Vec<u8> = (0..=255u8).collect();
    let mut acc = Sha256::new();
    let mut backend = IoStream::new(Cursor::new(file.clone()));
    backend.seek(SeekFrom::Start(100)).unwrap();

    {
        let seg = SegmentWrapper::new(Inner::borrowed(&mut backend), 100, 150).unwrap();
        let hashed = HashingWrapper::new(Inner::owned(seg), &mut acc);
        let mut traced = TraceWrapper::new(Inner::owned(hashed), "chain");
        assert!(!traced.caps().contains(Caps::SEEK));

        let mut dst = [0u8; 32];
        let mut total = 0;
        loop {
            let t = traced.read(&mut dst);
            total += t.len;
            if t.len == 0 || t.is_eof() {
                break;
            }
        }
        assert_eq!(total, 50);
        assert_eq!(traced.tell().unwrap(), 50);
        assert_eq!(traced.counters().bytes_read, 50);
        Box::new(traced).close().unwrap();
    }

    assert_eq!(acc.finalize().to_vec(), Sha256::digest(&file[100..150]).to_vec());
    // borrowed at the bottom: still open
    assert_eq!(backend.tell().unwrap(), 150);
}

#[test]
fn wrappers_hand_back_their_parts() {
    let mut s = IoStream::new(Cursor::new(Vec::new()));
    assert_eq!(s.write(b"abc").into_result().unwrap(), 3);
    assert_eq!(s.into_inner().into_inner(), b"abc".to_vec());

    let mut r = ReaderStream::new(&b"xyz"[..]);
    let mut one = [0u8; 1];
    r.read(&mut one);
    assert_eq!(r.into_inner(), b"yz");

    let data = [0u8; 4];
    let mut a = StdAdapter::new(ConstMemoryStream::new(&data));
    assert!(a.get_mut().write(b"x").into_result().is_err());
    let mut inner = a.into_inner();
    assert_eq!(inner.size().unwrap(), 4);
}
