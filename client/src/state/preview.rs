//! Image preview payload produced by local file reads.
//!
//! Reads are fire-and-forget. Each one gets a ticket when it starts, and
//! whichever read completes last owns the preview, regardless of the order
//! in which the files were picked.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Preview image state for the upload control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Data URL of the most recently completed read.
    pub data_url: Option<String>,
    pub reads_started: u64,
    pub reads_completed: u64,
    /// Ticket of the read that produced `data_url`.
    pub last_completed: Option<u64>,
}

impl PreviewState {
    /// Register a new in-flight read and return its ticket.
    pub fn begin_read(&mut self) -> u64 {
        self.reads_started += 1;
        self.reads_started
    }

    /// Store the payload of a finished read. Always overwrites.
    pub fn complete_read(&mut self, ticket: u64, data_url: String) {
        self.reads_completed += 1;
        self.last_completed = Some(ticket);
        self.data_url = Some(data_url);
    }

    pub fn has_image(&self) -> bool {
        self.data_url.is_some()
    }

    /// Reads started but not yet completed. Failed reads never complete.
    pub fn in_flight(&self) -> u64 {
        self.reads_started.saturating_sub(self.reads_completed)
    }
}
