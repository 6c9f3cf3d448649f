macro_rules! bail {
    ($err:expr, $byte:expr, $idx:expr) => {{
        ::tracing::trace!("rejected byte {:#04X}, idx={}", $byte, $idx);
        return Err($err);
    }};
}

macro_rules! class_map {
    ($($class:expr,)*) => ([
        $($class,)*
    ])
}
