use homesync_api::models::Device;

use crate::normalize::normalize_name;

/// What a phrase parsed into, before resolving against any device list.
///
/// Lives for a single interpretation call and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceIntent {
    /// Normalized key of the spoken device name span
    pub target: String,
    /// Requested on/off state
    pub desired_state: bool,
}

/// Parse a spoken phrase into a [`VoiceIntent`], or `None` when the phrase
/// is not a command.
///
/// Tokenization splits on whitespace runs after case folding. A phrase
/// qualifies only when it has at least two tokens and ends in `on` or
/// `off`. Every token before the state word belongs to the name span;
/// there is no wake-word prefix to strip.
pub fn parse_intent(phrase: &str) -> Option<VoiceIntent> {
    let lowered = phrase.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    if tokens.len() < 2 {
        return None;
    }

    let desired_state = match tokens[tokens.len() - 1] {
        "on" => true,
        "off" => false,
        _ => return None,
    };

    let span = tokens[..tokens.len() - 1].join(" ");

    Some(VoiceIntent {
        target: normalize_name(&span),
        desired_state,
    })
}

/// Resolve a spoken phrase against a device snapshot.
///
/// Returns `(None, None)` when the phrase is not a command (too short, or
/// no trailing state word), `(None, Some(state))` when the state word was
/// understood but no device name matched, and `(Some(device), Some(state))`
/// on a full match. Matching is exact on normalized names, first match in
/// snapshot order wins; there is no fuzzy or substring fallback.
///
/// This is a total function: no input panics or errors, and an unresolved
/// phrase is a normal negative result for the caller to ignore. Whether
/// the device is already in the requested state is the dispatcher's
/// concern, not checked here.
pub fn interpret<'a>(
    phrase: &str,
    devices: &'a [Device],
) -> (Option<&'a Device>, Option<bool>) {
    let Some(intent) = parse_intent(phrase) else {
        return (None, None);
    };

    let device = devices
        .iter()
        .find(|device| normalize_name(&device.name) == intent.target);

    (device, Some(intent.desired_state))
}
