use std::fmt;

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDef {
    /// The name used in source code.
    pub name:            &'static str,
    /// Whether the operation can appear on the right-hand side of a
    /// declaration.
    pub returns_value:   bool,
    /// Whether the coefficient block must be square.
    pub square_required: bool,
    /// Label printed in front of the result when run as a command.
    pub label:           &'static str,
}

/// Defines the operation catalog.
///
/// Each entry provides:
/// - the enum variant,
/// - the source name,
/// - whether the operation returns a value,
/// - whether it needs a square operand,
/// - the label used when printing its result.
///
/// The macro produces:
/// - `Operation` (one variant per entry),
/// - `OPERATIONS` (every variant, in catalog order),
/// - `Operation::def` (the entry's metadata).
macro_rules! operations {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $name:literal {
                returns_value: $returns:expr,
                square_required: $square:expr,
                label: $label:literal $(,)?
            }
        ),* $(,)?
    ) => {
        /// A catalog operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        /// Every operation, in catalog order.
        pub const OPERATIONS: &[Operation] = &[
            $(Operation::$variant,)*
        ];

        impl Operation {
            /// Returns the catalog entry of this operation.
            #[must_use]
            pub const fn def(self) -> OperationDef {
                match self {
                    $(
                        Self::$variant => OperationDef { name:            $name,
                                                         returns_value:   $returns,
                                                         square_required: $square,
                                                         label:           $label },
                    )*
                }
            }
        }
    };
}

operations! {
    /// Matrix inverse of the coefficient block.
    Inverse => "inv" {
        returns_value: true,
        square_required: true,
        label: "Inverse matrix",
    },
    /// Transpose of the coefficient block.
    Transpose => "trans" {
        returns_value: true,
        square_required: false,
        label: "Transposed matrix",
    },
    /// Permutation factor of the LU decomposition.
    LuP => "retP" {
        returns_value: true,
        square_required: true,
        label: "Matrix P",
    },
    /// Lower-triangular factor of the LU decomposition.
    LuL => "retL" {
        returns_value: true,
        square_required: true,
        label: "Matrix L",
    },
    /// Upper-triangular factor of the LU decomposition.
    LuU => "retU" {
        returns_value: true,
        square_required: true,
        label: "Matrix U",
    },
    /// Diagonal matrix built from the coefficient block's diagonal.
    Diagonal => "retD" {
        returns_value: true,
        square_required: true,
        label: "Diagonal matrix",
    },
    /// Determinant of the coefficient block.
    Determinant => "det" {
        returns_value: true,
        square_required: true,
        label: "Determinant",
    },
    /// Solution vector of the augmented system.
    Solve => "solve" {
        returns_value: true,
        square_required: false,
        label: "Solution",
    },
    /// Prints any variable. Only valid as a statement.
    Show => "show" {
        returns_value: false,
        square_required: false,
        label: "Value",
    },
}

impl Operation {
    /// Looks up an operation by its source name.
    ///
    /// # Example
    /// ```
    /// use prosis::interpreter::evaluator::operation::Operation;
    ///
    /// assert_eq!(Operation::from_name("inv"), Some(Operation::Inverse));
    /// assert!(!Operation::from_name("show").unwrap().returns_value());
    /// assert_eq!(Operation::from_name("invert"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        OPERATIONS.iter().copied().find(|op| op.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.def().name
    }

    #[must_use]
    pub const fn returns_value(self) -> bool {
        self.def().returns_value
    }

    #[must_use]
    pub const fn square_required(self) -> bool {
        self.def().square_required
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.def().label
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
