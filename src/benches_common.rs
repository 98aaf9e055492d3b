//! Helpers for writing benchmark binaries.

/// Generate a `criterion` group and `main` function for each named target.
///
/// The bench function is called with the criterion instance and the name of
/// the target, so a single function can switch over several workloads.
///
/// ```rust,ignore
/// fn bench(c: &mut Criterion, target: &str) { /* ... */ }
///
/// radix_set::gen_benches!(bench, insert, contains);
/// ```
#[macro_export]
macro_rules! gen_benches {
    ($bench:ident, $($target:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                fn [<run_ $target>](c: &mut ::criterion::Criterion) {
                    $bench(c, stringify!($target));
                }

                ::criterion::criterion_group!([<group_ $target>], [<run_ $target>]);
            )+

            ::criterion::criterion_main!($([<group_ $target>]),+);
        }
    };
}
