use std::time::Instant;

use ifsc_finder_bank_data::BranchRecord;

use crate::clipboard::{ClipboardSink, CopyAcknowledgement};
use crate::constants::{COPIED_MESSAGE, FETCH_FAILED_MESSAGE};
use crate::errors::{ClipboardError, ValidationError};
use crate::ifsc::{check_submission, format_warning, normalize_input, IfscCode};

/// Identifies one submitted lookup. Only the newest ticket can complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

/// View-local state for the single-field lookup.
///
/// Every transition is an explicit method. A completion carrying a ticket
/// older than the latest submission is dropped, so a slow superseded
/// response cannot overwrite a newer one.
#[derive(Debug, Default)]
pub struct LookupForm {
    input: String,
    format_warning: Option<&'static str>,
    error: Option<String>,
    loading: bool,
    branch: Option<BranchRecord>,
    latest_ticket: u64,
    copied: CopyAcknowledgement,
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store user input uppercased and refresh the advisory warning.
    pub fn set_input(&mut self, raw: &str) {
        self.input = normalize_input(raw);
        self.format_warning = format_warning(&self.input);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn format_warning(&self) -> Option<&'static str> {
        self.format_warning
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn branch(&self) -> Option<&BranchRecord> {
        self.branch.as_ref()
    }

    /// Gate the current input and start a lookup.
    ///
    /// On failure the inline error is set and no request should be issued.
    pub fn submit(&mut self) -> Result<(IfscCode, LookupTicket), ValidationError> {
        let code = match check_submission(&self.input) {
            Ok(code) => code,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        self.branch = None;
        self.copied.clear();
        Ok((code, LookupTicket(self.latest_ticket)))
    }

    /// Apply a lookup result. Returns false when the ticket is stale.
    pub fn complete(&mut self, ticket: LookupTicket, result: Option<BranchRecord>) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }

        self.loading = false;
        match result {
            Some(record) => {
                self.branch = Some(record);
                self.error = None;
            }
            None => {
                self.branch = None;
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Copy the resolved IFSC code and open the acknowledgment window.
    pub fn copy_ifsc(
        &mut self,
        sink: &dyn ClipboardSink,
        now: Instant,
    ) -> Result<&'static str, ClipboardError> {
        let record = self.branch.as_ref().ok_or(ClipboardError::NothingToCopy)?;
        sink.copy(&record.ifsc)?;
        self.copied.mark(now);
        Ok(COPIED_MESSAGE)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_active(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    fn record(ifsc: &str) -> BranchRecord {
        BranchRecord {
            bank: "HDFC Bank".to_string(),
            ifsc: ifsc.to_string(),
            branch: "Ahmedabad - Ashram Road".to_string(),
            address: "Ashram Road".to_string(),
            city: "AHMEDABAD".to_string(),
            district: "AHMEDABAD".to_string(),
            state: "GUJARAT".to_string(),
            micr: None,
            contact: None,
            upi: true,
            rtgs: true,
            neft: true,
            imps: true,
        }
    }

    #[derive(Default)]
    struct MockClipboard {
        copied: Mutex<Vec<String>>,
    }

    impl ClipboardSink for MockClipboard {
        fn copy(&self, text: &str) -> Result<(), ClipboardError> {
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Failed("no display".to_string()))
        }
    }

    #[test]
    fn test_input_is_uppercased_with_live_warning() {
        let mut form = LookupForm::new();
        form.set_input("sbin");
        assert_eq!(form.input(), "SBIN");
        assert!(form.format_warning().is_some());

        form.set_input("sbin0001234");
        assert_eq!(form.input(), "SBIN0001234");
        assert!(form.format_warning().is_none());

        form.set_input("");
        assert!(form.format_warning().is_none());
    }

    #[test]
    fn test_empty_submission_sets_error() {
        let mut form = LookupForm::new();
        assert_eq!(form.submit(), Err(ValidationError::Empty));
        assert_eq!(form.error(), Some("Please enter an IFSC code"));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_malformed_submission_sets_error() {
        let mut form = LookupForm::new();
        form.set_input("ABCD1234567");
        assert!(form.submit().is_err());
        assert_eq!(form.error(), Some("Please enter a valid IFSC code"));
        assert!(!form.is_loading());
    }

    #[test]
    fn test_successful_lookup_cycle() {
        let mut form = LookupForm::new();
        form.set_input("HDFC0000053");
        let (code, ticket) = form.submit().unwrap();
        assert_eq!(code.as_str(), "HDFC0000053");
        assert!(form.is_loading());

        assert!(form.complete(ticket, Some(record("HDFC0000053"))));
        assert!(!form.is_loading());
        assert_eq!(form.branch().unwrap().bank, "HDFC Bank");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_absent_result_shows_generic_failure() {
        let mut form = LookupForm::new();
        form.set_input("HDFC0000053");
        let (_, ticket) = form.submit().unwrap();

        assert!(form.complete(ticket, None));
        assert_eq!(form.error(), Some(FETCH_FAILED_MESSAGE));
        assert!(form.branch().is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = LookupForm::new();
        form.set_input("HDFC0000053");
        let (_, first) = form.submit().unwrap();

        form.set_input("SBIN0001234");
        let (_, second) = form.submit().unwrap();

        assert!(!form.complete(first, Some(record("HDFC0000053"))));
        assert!(form.is_loading());
        assert!(form.branch().is_none());

        assert!(form.complete(second, Some(record("SBIN0001234"))));
        assert_eq!(form.branch().unwrap().ifsc, "SBIN0001234");
    }

    #[test]
    fn test_new_submission_discards_previous_record() {
        let mut form = LookupForm::new();
        form.set_input("HDFC0000053");
        let (_, ticket) = form.submit().unwrap();
        form.complete(ticket, Some(record("HDFC0000053")));

        form.submit().unwrap();
        assert!(form.branch().is_none());
    }

    #[test]
    fn test_copy_ifsc() {
        let mut form = LookupForm::new();
        let clipboard = MockClipboard::default();
        let now = Instant::now();

        assert!(matches!(
            form.copy_ifsc(&clipboard, now),
            Err(ClipboardError::NothingToCopy)
        ));

        form.set_input("HDFC0000053");
        let (_, ticket) = form.submit().unwrap();
        form.complete(ticket, Some(record("HDFC0000053")));

        assert_eq!(form.copy_ifsc(&clipboard, now).unwrap(), COPIED_MESSAGE);
        assert_eq!(*clipboard.copied.lock().unwrap(), vec!["HDFC0000053"]);
        assert!(form.is_copied(now + Duration::from_secs(1)));
        assert!(!form.is_copied(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_failed_copy_does_not_acknowledge() {
        let mut form = LookupForm::new();
        form.set_input("HDFC0000053");
        let (_, ticket) = form.submit().unwrap();
        form.complete(ticket, Some(record("HDFC0000053")));

        let now = Instant::now();
        assert!(form.copy_ifsc(&BrokenClipboard, now).is_err());
        assert!(!form.is_copied(now));
    }
}
