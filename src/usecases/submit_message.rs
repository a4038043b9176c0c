//! Use case for submitting a `set_message` transaction.
//!
//! Validates local preconditions, builds the entry function payload, and
//! delegates to a `MessageSubmitter` implementation.

use crate::wallet::payload::EntryFunctionPayload;

/// Errors that can occur at the source level (wallet side).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitSourceError {
    /// The wallet refused to sign or submit.
    Rejected,
    /// The wallet could not be reached.
    Unavailable,
}

/// Domain-level errors for the submit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A previous submission has not finished yet.
    AlreadyInFlight,
    /// No account address is available to target.
    MissingAddress,
    /// The draft message is empty.
    EmptyMessage,
    /// The wallet refused the transaction.
    Rejected,
    /// The wallet is temporarily unavailable.
    TemporarilyUnavailable,
}

/// Trait for handing a signed-payload request to the wallet.
pub trait MessageSubmitter {
    fn submit(&mut self, payload: EntryFunctionPayload) -> Result<(), SubmitSourceError>;
}

/// Submits the draft message as a `set_message` call on the given account.
///
/// Preconditions are checked in order: no submission may already be in
/// flight, an address must be known, and the message must be non-empty.
/// The message itself is passed through verbatim, whitespace included.
pub fn submit_message(
    submitter: &mut dyn MessageSubmitter,
    in_flight: bool,
    address: Option<&str>,
    message: &str,
) -> Result<(), SubmitError> {
    if in_flight {
        return Err(SubmitError::AlreadyInFlight);
    }
    let address = address.ok_or(SubmitError::MissingAddress)?;
    if message.is_empty() {
        return Err(SubmitError::EmptyMessage);
    }

    submitter
        .submit(EntryFunctionPayload::set_message(address, message))
        .map_err(map_source_error)
}

fn map_source_error(error: SubmitSourceError) -> SubmitError {
    match error {
        SubmitSourceError::Rejected => SubmitError::Rejected,
        SubmitSourceError::Unavailable => SubmitError::TemporarilyUnavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSubmitter {
        result: Result<(), SubmitSourceError>,
        captured: Option<EntryFunctionPayload>,
    }

    impl StubSubmitter {
        fn with_result(result: Result<(), SubmitSourceError>) -> Self {
            Self {
                result,
                captured: None,
            }
        }
    }

    impl MessageSubmitter for StubSubmitter {
        fn submit(&mut self, payload: EntryFunctionPayload) -> Result<(), SubmitSourceError> {
            self.captured = Some(payload);
            self.result.clone()
        }
    }

    #[test]
    fn rejects_when_submission_already_in_flight() {
        let mut submitter = StubSubmitter::with_result(Ok(()));

        let result = submit_message(&mut submitter, true, Some("0xcafe"), "hello");

        assert_eq!(result, Err(SubmitError::AlreadyInFlight));
        assert!(submitter.captured.is_none());
    }

    #[test]
    fn rejects_when_no_address_is_known() {
        let mut submitter = StubSubmitter::with_result(Ok(()));

        let result = submit_message(&mut submitter, false, None, "hello");

        assert_eq!(result, Err(SubmitError::MissingAddress));
        assert!(submitter.captured.is_none());
    }

    #[test]
    fn rejects_empty_message() {
        let mut submitter = StubSubmitter::with_result(Ok(()));

        let result = submit_message(&mut submitter, false, Some("0xcafe"), "");

        assert_eq!(result, Err(SubmitError::EmptyMessage));
        assert!(submitter.captured.is_none());
    }

    #[test]
    fn keeps_surrounding_whitespace_in_the_message() {
        let mut submitter = StubSubmitter::with_result(Ok(()));

        let result = submit_message(&mut submitter, false, Some("0xcafe"), "  hi  ");

        assert_eq!(result, Ok(()));
        let payload = submitter.captured.expect("payload should be captured");
        assert_eq!(payload.arguments, vec!["  hi  ".to_owned()]);
    }

    #[test]
    fn builds_set_message_payload_for_the_account() {
        let mut submitter = StubSubmitter::with_result(Ok(()));

        let result = submit_message(&mut submitter, false, Some("0xcafe"), "hello");

        assert_eq!(result, Ok(()));
        let payload = submitter.captured.expect("payload should be captured");
        assert_eq!(payload.function, "0xcafe::message::set_message");
        assert!(payload.type_arguments.is_empty());
    }

    #[test]
    fn maps_rejected_error() {
        let mut submitter = StubSubmitter::with_result(Err(SubmitSourceError::Rejected));

        let result = submit_message(&mut submitter, false, Some("0xcafe"), "hello");

        assert_eq!(result, Err(SubmitError::Rejected));
    }

    #[test]
    fn maps_unavailable_error() {
        let mut submitter = StubSubmitter::with_result(Err(SubmitSourceError::Unavailable));

        let result = submit_message(&mut submitter, false, Some("0xcafe"), "hello");

        assert_eq!(result, Err(SubmitError::TemporarilyUnavailable));
    }
}
