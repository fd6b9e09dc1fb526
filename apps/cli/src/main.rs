//! Terminal flashcard drilling.

fn main() -> anyhow::Result<()> {
    flashdrill_cli::run()
}
