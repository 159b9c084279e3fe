// Registry of built-in column kinds.
//
// Each entry is `(Variant, "name")`. The name is the hashed identity of the
// column type, so entries must never be renamed once digests are persisted.
macro_rules! column_kind_registry_entries {
    ($macro:ident) => {
        $macro! {
            @entries
            (Bool, "bool"),
            (Byte, "byte"),
            (Short, "short"),
            (UShort, "ushort"),
            (Int, "int"),
            (UInt, "uint"),
            (Long, "long"),
            (ULong, "ulong"),
            (Float, "float"),
            (Double, "double"),
            (Decimal, "decimal"),
            (String, "string"),
            (Date, "date"),
            (Time, "time"),
            (DateTime, "datetime"),
            (Guid, "guid"),
            (Blob, "blob"),
        }
    };
}

macro_rules! column_kind_enum_from_registry {
    ( @entries $( ($kind:ident, $name:literal) ),* $(,)? ) => {
        ///
        /// ColumnKind
        ///
        /// Built-in column types with a fixed registry name.
        ///

        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum ColumnKind {
            $( $kind, )*
        }

        impl ColumnKind {
            /// Registry name; the hashed identity of the column type.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$kind => $name, )*
                }
            }

            /// Resolve a registry name back to its kind.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$kind), )*
                    _ => None,
                }
            }
        }

        /// Ordered list of all built-in column kinds in registry order.
        pub const ALL_COLUMN_KINDS: &[ColumnKind] = &[ $( ColumnKind::$kind ),* ];
    };
}
