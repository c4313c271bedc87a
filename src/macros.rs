#[macro_export]
macro_rules! toml {
    // Handle null
    (null) => {
        $crate::TomlValue::Null
    };

    // Handle true
    (true) => {
        $crate::TomlValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::TomlValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::TomlValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::TomlValue::Array(vec![$($crate::toml!($elem)),*])
    };

    // Handle empty table
    ({}) => {
        $crate::TomlValue::Table($crate::TomlMap::new())
    };

    // Handle non-empty table
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::TomlMap::new();
        $(
            table.insert($key.to_string(), $crate::toml!($value));
        )*
        $crate::TomlValue::Table(table)
    }};

    // Fallback for any other expression
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::TomlValue::Null)
    }};
}
