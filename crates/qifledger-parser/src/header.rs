//! Classification of block header lines.
//!
//! Every header starts with `!`. The recognizer only needs to know which of a
//! handful of shapes a peeked line has; anything else is skipped.

/// Marker that opens an auto-switch region.
pub const AUTO_SWITCH: &str = "!Option:AutoSwitch";
/// Marker that closes an auto-switch region.
pub const CLEAR_AUTO_SWITCH: &str = "!Clear:AutoSwitch";
/// Account declaration header.
pub const ACCOUNT: &str = "!Account";
/// Prefix of every record-type header.
pub const TYPE_PREFIX: &str = "!Type:";
/// Category-list record type.
pub const CATEGORY_TYPE: &str = "!Type:Cat";
/// Class-list record type.
pub const CLASS_TYPE: &str = "!Type:Class";

/// The shape of a line, as far as block recognition is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header<'a> {
    /// `!Option:AutoSwitch`
    AutoSwitch,
    /// `!Clear:AutoSwitch`
    ClearAutoSwitch,
    /// `!Account`
    Account,
    /// `!Type:Cat`
    Category,
    /// `!Type:Class`
    Class,
    /// Any other `!Type:<name>`; carries the type name.
    Records(&'a str),
    /// Some other `!` line.
    Other,
    /// Not a header at all.
    Data,
}

impl<'a> Header<'a> {
    /// Classify a trimmed line.
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with(AUTO_SWITCH) {
            Self::AutoSwitch
        } else if line.starts_with(CLEAR_AUTO_SWITCH) {
            Self::ClearAutoSwitch
        } else if line.starts_with(ACCOUNT) {
            Self::Account
        } else if line.starts_with(CATEGORY_TYPE) {
            Self::Category
        } else if line.starts_with(CLASS_TYPE) {
            Self::Class
        } else if let Some(name) = line.strip_prefix(TYPE_PREFIX) {
            Self::Records(name.trim())
        } else if line.starts_with("!Type") {
            Self::Records("")
        } else if is_header(line) {
            Self::Other
        } else {
            Self::Data
        }
    }
}

/// Whether a line starts a new block.
pub fn is_header(line: &str) -> bool {
    line.starts_with('!')
}

/// The lookahead rule shared by every repeating run: the run ends at end of
/// input or when the next line is a header.
pub fn should_break(peeked: Option<&str>, is_header: impl Fn(&str) -> bool) -> bool {
    peeked.map_or(true, is_header)
}
