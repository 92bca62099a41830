//! Finding collection for workspace checks.

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, attributed to the manifest file it was found in.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

/// Accumulates findings across all check passes.
#[derive(Debug, Default)]
pub struct Diagnostics {
    findings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, file, message);
    }

    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, file, message);
    }

    fn push(&mut self, severity: Severity, file: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Diagnostic {
            file: file.into(),
            message: message.into(),
            severity,
        });
    }

    /// All findings in discovery order.
    pub fn findings(&self) -> &[Diagnostic] {
        &self.findings
    }

    pub fn error_count(&self) -> usize {
        self.of_severity(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.of_severity(Severity::Warning).count()
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    fn of_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.findings.iter().filter(move |diagnostic| diagnostic.severity == severity)
    }

    /// Print findings to stderr, errors before warnings.
    pub fn emit(&self) {
        for diagnostic in self.of_severity(Severity::Error) {
            eprintln!("[ERROR] {}: {}", diagnostic.file, diagnostic.message);
        }
        for diagnostic in self.of_severity(Severity::Warning) {
            eprintln!("[WARN] {}: {}", diagnostic.file, diagnostic.message);
        }
    }
}
