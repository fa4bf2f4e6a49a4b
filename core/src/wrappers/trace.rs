//! wrappers/trace.rs
//! Diagnostic layer: logs every call, its arguments and its result.
//!
//! Records go through the `log` facade under [`TRACE_TARGET`], synchronously,
//! before the call returns. Data and control flow are left untouched.

use std::fmt;
use std::io::SeekFrom;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crate::config::TraceConfig;
use crate::constants::TRACE_TARGET;
use crate::stream::{Caps, Inner, VStream};
use crate::telemetry::TraceCounters;
use crate::types::{IoStatus, StreamResult, Transfer};

static NEXT_TRACE_ID: AtomicU64 = AtomicU64::new(1);

fn status_name(status: &IoStatus) -> &'static str {
    match status {
        IoStatus::Ready => "ready",
        IoStatus::Eof => "eof",
        IoStatus::Error(_) => "error",
    }
}

/// Identity stamped on every record of one wrapper.
struct Tracer {
    id: u64,
    tag: Box<str>,
    level: log::Level,
}

impl Tracer {
    fn emit(&self, args: fmt::Arguments<'_>) {
        log::log!(
            target: TRACE_TARGET,
            self.level,
            "[{:?} :: #{} :: {}] {}",
            thread::current().id(),
            self.id,
            self.tag,
            args
        );
    }

    fn emit_result<T: fmt::Display>(&self, call: fmt::Arguments<'_>, result: &StreamResult<T>) {
        match result {
            Ok(v) => self.emit(format_args!("{} = {}", call, v)),
            Err(e) => {
                self.emit(format_args!("{} = -1", call));
                self.emit(format_args!("Error: {}", e));
            }
        }
    }
}

pub struct TraceWrapper<'a> {
    inner: Inner<'a>,
    tracer: Tracer,
    report_position: bool,
    counters: TraceCounters,
}

impl<'a> TraceWrapper<'a> {
    pub fn new(inner: Inner<'a>, tag: &str) -> Self {
        Self::with_config(inner, tag, TraceConfig::default())
    }

    pub fn with_config(inner: Inner<'a>, tag: &str, config: TraceConfig) -> Self {
        let tracer = Tracer {
            id: NEXT_TRACE_ID.fetch_add(1, Ordering::Relaxed),
            tag: tag.into(),
            level: config.level.into(),
        };
        tracer.emit(format_args!("opened; autoclose={}", inner.autoclose()));

        TraceWrapper {
            inner,
            tracer,
            report_position: config.report_position,
            counters: TraceCounters::default(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tracer.tag
    }

    pub fn counters(&self) -> &TraceCounters {
        &self.counters
    }

    pub fn is_autoclose(&self) -> bool {
        self.inner.autoclose()
    }

    fn emit_transfer(&mut self, op: &str, requested: usize, t: &Transfer) {
        self.tracer.emit(format_args!(
            "{}(len={}) = {} [{}]",
            op,
            requested,
            t.len,
            status_name(&t.status)
        ));
        if let IoStatus::Error(e) = &t.status {
            self.counters.errors += 1;
            self.tracer.emit(format_args!("Error: {}", e));
        }
    }
}

impl VStream for TraceWrapper<'_> {
    fn read(&mut self, dst: &mut [u8]) -> Transfer {
        let t = self.inner.get().read(dst);
        self.counters.add_read(t.len);
        self.emit_transfer("read", dst.len(), &t);

        if self.report_position {
            match self.inner.get().tell() {
                Ok(pos) => self.tracer.emit(format_args!("`--> {}", pos)),
                Err(_) => self.tracer.emit(format_args!("`--> ?")),
            }
        }
        t
    }

    fn write(&mut self, src: &[u8]) -> Transfer {
        let t = self.inner.get().write(src);
        self.counters.add_write(t.len);
        self.emit_transfer("write", src.len(), &t);
        t
    }

    fn seek(&mut self, pos: SeekFrom) -> StreamResult<u64> {
        let r = self.inner.get().seek(pos);
        self.counters.seeks += 1;
        if r.is_err() {
            self.counters.errors += 1;
        }
        self.tracer.emit_result(format_args!("seek({:?})", pos), &r);
        r
    }

    fn size(&mut self) -> StreamResult<u64> {
        let r = self.inner.get().size();
        self.counters.size_queries += 1;
        if r.is_err() {
            self.counters.errors += 1;
        }
        self.tracer.emit_result(format_args!("size()"), &r);
        r
    }

    fn close(self: Box<Self>) -> StreamResult<()> {
        let TraceWrapper { inner, tracer, .. } = *self;

        let result = if inner.autoclose() {
            let r = inner.release();
            match &r {
                Ok(()) => tracer.emit(format_args!("close() = 0")),
                Err(e) => {
                    tracer.emit(format_args!("close() = -1"));
                    tracer.emit(format_args!("Error: {}", e));
                }
            }
            r
        } else {
            Ok(())
        };

        tracer.emit(format_args!("closed {}", if result.is_ok() { 0 } else { -1 }));
        result
    }

    fn caps(&self) -> Caps {
        self.inner.caps()
    }
}
