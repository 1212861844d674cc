//! Run summary collected by the pipeline.

/// Which stage a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Walk,
    Archive,
    Manifest,
    Download,
}

/// A non-fatal failure recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    /// Archive path, manifest source or URL the failure concerns.
    pub subject: String,
    pub message: String,
}

/// Counters and failures for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub archives_inspected: usize,
    pub manifests_read: usize,
    pub manifests_missing: usize,
    pub invalid_lines: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failures: Vec<Failure>,
}

impl RunReport {
    /// True when nothing failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }

    pub(crate) fn fail(
        &mut self,
        kind: FailureKind,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.failures.push(Failure {
            kind,
            subject: subject.into(),
            message: message.into(),
        });
    }
}
