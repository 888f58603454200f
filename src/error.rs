pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents an application error in Draughtsman.
///
/// Errors stack: a caller that adds context keeps its own kind and appends the cause underneath.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What went wrong.
pub enum Kind
{
    /// Move text matches several legal capture chains.
    AmbiguousMove,
    InternalError,
    /// A move that is not legal in the current position.
    InvalidMove,
    InvalidOption,
    /// A square off the board, or a light square where a piece was expected.
    InvalidSquare,
    InvalidState,
    IoError,
    LoggerError,
    MismatchError,
    /// A strategy was asked to move in a finished game.
    NoLegalMoves,
    ParseError,
    /// A timed search ran past its deadline. Iterative deepening absorbs these.
    SearchTimeout,
    /// A player could not come up with a move at all.
    StrategyFailure,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{:?}", self.kind)?;
        if !self.msg.is_empty()
        {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error::new(Kind::IoError, value.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for Error
{
    fn from(value: flexi_logger::FlexiLoggerError) -> Self
    {
        Error::new(Kind::LoggerError, value.to_string())
    }
}

impl Error
{
    /// Puts this error underneath `base`, which gives the result its kind.
    pub fn chain(&self, base: Error) -> Error
    {
        let cause = self.to_string();
        let msg = match base.msg.is_empty()
        {
            | true => cause,
            | false => format!("{}\n\tdue to {}", base.msg, cause),
        };
        Error::new(base.kind, msg)
    }

    /// Puts this error underneath a parse error for `T`.
    pub fn chain_parse<T>(&self, s: String) -> Error
    {
        self.chain(Error::for_parse::<T>(s))
    }

    /// An error with no further explanation.
    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, String::new())
    }

    /// Whether the process itself is in trouble, as opposed to a single player or request.
    ///
    /// A fatal error during a match still only forfeits the game; it is the binary that gives up on it.
    pub fn fatal(&self) -> bool
    {
        matches!(self.kind, Kind::InternalError | Kind::IoError | Kind::LoggerError)
    }

    /// A parse error naming the type that could not be parsed.
    pub fn for_parse<T>(s: String) -> Error
    {
        Error::new(Kind::ParseError, format!("'{}' is not a valid {}.", s, Error::type_name::<T>()))
    }

    /// Two values that should have agreed did not.
    pub fn mismatch<T: std::fmt::Display>(expected: T, actual: T) -> Error
    {
        let err_msg = format!("Expected {} {}, found {}.", Error::type_name::<T>(), expected, actual);
        Error::new(Kind::MismatchError, err_msg)
    }

    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// The last path segment of a type's name.
    pub fn type_name<T>() -> &'static str
    {
        let full = std::any::type_name::<T>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
