//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
A destination for finished log lines.

Implementations must never panic or report failure to the caller: a line that cannot be written is
dropped.
*/
pub trait Sink: Debug + Send + Sync {
    /**
        Writes one finished line.  The record already ends in a newline.
    */
    fn finish_log_record(&self, record: LogRecord);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self);
}

/**
A sink that drops everything.

Inactive statements bind to this sink.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiscardSink;

pub(crate) static DISCARD: DiscardSink = DiscardSink;

impl Sink for DiscardSink {
    #[inline]
    fn finish_log_record(&self, _record: LogRecord) {}

    #[inline]
    fn flush(&self) {}
}

/*
Boilerplate notes.

# Sink

I don't think Clone on Sink makes sense, since most sinks own a handle.
PartialEq and Eq are possible but it's a little unclear if we mean data equality or the same destination.  Let's avoid that.
Default is not necessarily sensible since who knows how the sink is constructed (does it need a filename to log to, etc.)
Send/Sync are required; one sink serves every thread.
*/
