use std::fmt;

/// The argument shape of a wrapped call function, fixed at configuration time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CallArity {
    /// `fn()`; invocation-time variables are ignored.
    NoArgs,
    /// `fn(variables)`; variables are passed straight through.
    Single,
    /// `fn(payload, secondary)`; variables are split by a `VariablesLayout`.
    PayloadWithSecondary,
}

impl fmt::Display for CallArity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallArity::NoArgs => "no-args",
            CallArity::Single => "single",
            CallArity::PayloadWithSecondary => "payload+secondary",
        };
        f.write_str(name)
    }
}
