//! Addresses, aliasing and copies. Takes no arguments.

use bytewise_lessons::Lesson;

fn main() -> anyhow::Result<()> {
    bytewise_cli::run_standalone(Lesson::Memory)
}
