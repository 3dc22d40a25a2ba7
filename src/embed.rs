//! Resource set declarations.

/// Declare one or more named resource sets.
///
/// Each set becomes a module exposing `get_filesystem()`, which returns the
/// process-wide [`ResourceFilesystem`](crate::ResourceFilesystem) for that
/// set. The table is built on first access.
///
/// ```ignore
/// resource_fs::embed_resources! {
///     pub mod assets {
///         "hello.txt" => include_bytes!("../assets/hello.txt"),
///         "empty.txt" => b"",
///     }
///     pub mod enoent {}
/// }
///
/// let data = enoent::get_filesystem().open("hello.txt");
/// assert!(data.begin().is_null() && data.end().is_null());
/// ```
///
/// Data expressions are evaluated inside the generated module, so they
/// should be literals, `include_bytes!` or absolute paths to statics.
///
/// # Panics
///
/// `get_filesystem()` panics if the declaration lists the same path twice or
/// a path that normalizes to nothing.
#[macro_export]
macro_rules! embed_resources {
    ($($(#[$attr:meta])* $vis:vis mod $name:ident { $($path:literal => $data:expr),* $(,)? })*) => {
        $(
            $(#[$attr])*
            $vis mod $name {
                $crate::__private::lazy_static! {
                    static ref FILESYSTEM: $crate::ResourceFilesystem =
                        $crate::ResourceFilesystem::builder(stringify!($name))
                            $(.resource($path, &$data[..]))*
                            .build()
                            .unwrap_or_else(|err| {
                                panic!("invalid resource set `{}`: {}", stringify!($name), err)
                            });
                }

                /// Resource table for this set.
                pub fn get_filesystem() -> &'static $crate::ResourceFilesystem {
                    &*FILESYSTEM
                }
            }
        )*
    };
}
