use crate::env::Bindings;
use crate::token::{Chain, ChainKind, Sigil};

/// Which symbol sources a bare identifier may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BareScope {
    pub(crate) variables: bool,
    pub(crate) callables: bool,
}

/// Resolution strategy selected for a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Strategy<'c> {
    Nothing,
    /// `:hint`
    NamespaceLiteral { hint: &'c str },
    /// `Ns.Sub.hint`; `literal` roots skip alias expansion (`:lists.hint`)
    QualifiedNamespace {
        segments: &'c [String],
        hint: &'c str,
        literal: bool,
    },
    /// `var.field.hint`
    VariableMember { segments: &'c [String], hint: &'c str },
    Bare { hint: &'c str, scope: BareScope },
}

fn looks_like_namespace(segment: &str) -> bool {
    segment.chars().next().is_some_and(char::is_uppercase)
}

pub(crate) fn classify<'c>(chain: &'c Chain, bindings: &Bindings) -> Strategy<'c> {
    let hint = chain.hint.as_str();
    match chain.kind {
        ChainKind::Invalid => Strategy::Nothing,
        ChainKind::NamespaceLiteral => Strategy::NamespaceLiteral { hint },
        ChainKind::Bare => match chain.sigil {
            None | Some(Sigil::Bang) => Strategy::Bare {
                hint,
                scope: BareScope {
                    variables: true,
                    callables: true,
                },
            },
            Some(Sigil::Pin) => Strategy::Bare {
                hint,
                scope: BareScope {
                    variables: true,
                    callables: false,
                },
            },
            Some(Sigil::Capture) => Strategy::Bare {
                hint,
                scope: BareScope {
                    variables: false,
                    callables: true,
                },
            },
            Some(Sigil::Attribute) | Some(Sigil::Colon) => Strategy::Nothing,
        },
        ChainKind::Dotted => {
            let segments = chain.segments.as_slice();
            let Some(first) = segments.first() else {
                return Strategy::Nothing;
            };
            match chain.sigil {
                Some(Sigil::Colon) => Strategy::QualifiedNamespace {
                    segments,
                    hint,
                    literal: true,
                },
                Some(Sigil::Pin) | Some(Sigil::Attribute) => Strategy::Nothing,
                None | Some(Sigil::Bang) | Some(Sigil::Capture) => {
                    if bindings.get(first).is_some() {
                        Strategy::VariableMember { segments, hint }
                    } else if looks_like_namespace(first) {
                        Strategy::QualifiedNamespace {
                            segments,
                            hint,
                            literal: false,
                        }
                    } else {
                        Strategy::Nothing
                    }
                }
            }
        }
    }
}
