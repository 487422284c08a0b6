/// Shown for any lookup that produced no usable record
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch bank details. Please try again.";

/// Advisory shown while the user types a malformed code
pub const FORMAT_WARNING_MESSAGE: &str =
    "Invalid IFSC format. IFSC should be 11 characters (e.g., SBIN0001234).";

/// Banner for the disabled Bank → State → District → Branch search
pub const SEARCH_UNAVAILABLE_MESSAGE: &str = "Search by bank details is currently unavailable.";

/// Placeholder for absent optional fields
pub const NOT_AVAILABLE: &str = "Not Available";

/// Acknowledgment after copying the IFSC code
pub const COPIED_MESSAGE: &str = "IFSC Code has been copied to clipboard.";
