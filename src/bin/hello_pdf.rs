//! Writes a one-page "Hello, World!" PDF.
//!
//! Usage: `hello_pdf [OUTPUT]`. Without OUTPUT the document goes to stdout.
//! Set `RUST_LOG=debug` to see every object as it is written.

use pdf_scribe::writer::{Catalog, Contents, Font, Outlines, Page, Pages, PdfWriter, Resources};
use std::io::Write;

fn hello_world() -> pdf_scribe::Result<Catalog> {
    let font = Font::new("Type0", "F1", "TimesNewRoman", "UniJIS-UCS2-H")?;
    let page = Page::new(
        Contents::new("BT /F1 24 Tf 100 100 Td (Hello, World!) Tj ET"),
        Resources::new(vec![font]),
    );
    Ok(Catalog::new(Pages::new(vec![page])).with_outlines(Outlines::new(0)))
}

fn run(output: Option<String>) -> pdf_scribe::Result<()> {
    let catalog = hello_world()?;
    let writer = PdfWriter::new();

    match output {
        Some(path) => {
            writer.save(&catalog, &path)?;
            log::info!("Saved {}", path);
        },
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            writer.write_to(&catalog, &mut lock)?;
            lock.flush()?;
        },
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(std::env::args().nth(1)) {
        eprintln!("Failed to write PDF: {}", e);
        std::process::exit(1);
    }
}
