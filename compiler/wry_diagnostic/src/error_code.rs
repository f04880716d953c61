use std::fmt;

/// Pipeline stage a code belongs to; the first digit of the code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    /// `E0xxx`
    Lex,
    /// `E1xxx`
    Parse,
    /// `E6xxx`
    Runtime,
}

macro_rules! error_codes {
    ($($phase:ident { $($code:ident => $description:literal,)* })*) => {
        /// Stable identifiers for every Wry diagnostic.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $($(
                #[doc = $description]
                $code,
            )*)*
        }

        impl ErrorCode {
            /// Every code, in numeric order.
            pub const ALL: &'static [ErrorCode] = &[$($(ErrorCode::$code,)*)*];

            /// The code as written in output, e.g. `"E1001"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => stringify!($code),)*)*
                }
            }

            /// Short description, used when a diagnostic has no message.
            pub fn description(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => $description,)*)*
                }
            }

            pub fn phase(self) -> Phase {
                match self {
                    $($(ErrorCode::$code => Phase::$phase,)*)*
                }
            }
        }
    };
}

error_codes! {
    Lex {
        E0001 => "unterminated string literal",
        E0002 => "invalid character in source",
        E0003 => "invalid number literal",
        E0004 => "invalid escape sequence",
    }
    Parse {
        E1001 => "unexpected token",
        E1002 => "expected an expression",
        E1003 => "unclosed delimiter",
        E1004 => "expected a name",
        E1005 => "expected a block",
        E1006 => "invalid assignment target",
        E1007 => "`break` or `continue` outside of a loop",
        E1008 => "chained comparison",
        E1009 => "fault kind used as a `catch` binding",
    }
    Runtime {
        E6001 => "unbound name",
        E6002 => "type mismatch",
        E6003 => "arity mismatch",
        E6004 => "division by zero",
        E6005 => "key not found",
        E6006 => "integer overflow",
        E6007 => "recursion limit exceeded",
        E6008 => "uncaught raised value",
        E6099 => "error raised by a host function",
    }
}

impl ErrorCode {
    /// Name of the runtime fault kind behind a code, as written in a
    /// `catch K as e` list.
    pub fn fault_kind(self) -> Option<&'static str> {
        let kind = match self {
            ErrorCode::E6001 => "UnboundName",
            ErrorCode::E6002 => "TypeMismatch",
            ErrorCode::E6003 => "ArityMismatch",
            ErrorCode::E6004 => "DivisionByZero",
            ErrorCode::E6005 => "KeyNotFound",
            ErrorCode::E6006 => "IntegerOverflow",
            ErrorCode::E6007 => "RecursionLimit",
            ErrorCode::E6008 => "Raised",
            ErrorCode::E6099 => "Custom",
            _ => return None,
        };
        Some(kind)
    }

    /// True when `name` spells a runtime fault kind.
    pub fn is_fault_kind(name: &str) -> bool {
        ErrorCode::ALL
            .iter()
            .any(|code| code.fault_kind() == Some(name))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
