use std::io::{self, Write};

use super::PROGRAM_NAME;

/// Usage text printed for `--help`.
const HELP_TEXT: &str = concat!(
    "Synchronizes the content of the target directory with the source directory.\n",
    "Extraneous target content is deleted, modified files are updated and new\n",
    "content is created.\n",
    "\n",
    "Usage: dirsync [<options>] <source> <target>\n",
    "  source: Path to the directory to read from.\n",
    "  target: Path to the directory to write to.\n",
    "\n",
    "Options:\n",
    "  -e, --exclude <NAMES>     Comma-delimited directory names to skip, each as\n",
    "                            name[:level]. May be repeated.\n",
    "  -h, --help                Show this help message and exit.\n",
    "      --info <FLAGS>        Fine-grained console output, e.g. walk2,copy0,all1.\n",
    "                            Flags: walk, copy, del, create, check, skip, stats, misc.\n",
    "  -o, --operations <NAMES>  Comma-delimited operations to perform (default: all).\n",
    "  -q, --quiet               Report only failures and the final status.\n",
    "  -r, --recursive           Descend into subdirectories (default).\n",
    "      --no-recursive        Process only the top-level directory pair.\n",
    "  -v, --verbose             Report more detail; repeat for traversal and checks.\n",
    "  -V, --version             Output version information and exit.\n",
    "\n",
    "Operations to be performed in the target directory:\n",
    "  all:    All three operations (default).\n",
    "  delete: Delete items missing under the source directory.\n",
    "  update: Update files different from the source directory.\n",
    "  create: Create new files appeared in the source directory.\n",
    "\n",
    "An exclusion consists of a source folder name and of an optional directory\n",
    "nesting level. 0 is for the first level and -1 for all levels (default).\n",
    "\n",
    "Diagnostics are filtered by the DIRSYNC_LOG environment variable.\n",
);

pub(crate) fn write_help<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    out.write_all(HELP_TEXT.as_bytes())
}

pub(crate) fn write_version<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION"))
}

/// Hint appended to every usage error.
pub(crate) fn write_usage_hint<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Run \"{PROGRAM_NAME} -h\" to get usage information.")
}
