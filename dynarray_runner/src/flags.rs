use std::path::PathBuf;

xflags::xflags! {
    /// Drive a dynamic array and report how its backing store is resized.
    cmd dynarray {
        /// Log every reallocation.
        optional -v, --verbose
        /// TOML file with the resize policy to use.
        optional --config config: PathBuf

        /// Append elements one by one and report each growth.
        cmd analyze {
            /// Number of elements to append.
            optional -n, --count count: usize
            /// Capacity to start from.
            optional -c, --capacity capacity: usize
        }

        /// Fill the array, then delete down to one element and report each shrink.
        cmd drain {
            /// Number of elements to start with.
            optional -n, --count count: usize
        }

        /// Apply an edit script, printing the array after every line.
        cmd replay {
            required script: PathBuf
            /// Capacity to start from.
            optional -c, --capacity capacity: usize
        }
    }
}
