//! Static export: render every wiki page to a directory of HTML files.
//!
//! Usage: codex-export <out_dir> [data_path]

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use codex_data::Collection;
use codex_render::{pages, slugify, EntityLinker};
use codex_server::DataProvider;
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter("codex_export=info")
        .init();

    let mut args = std::env::args().skip(1);
    let Some(out_dir) = args.next() else {
        eprintln!("usage: codex-export <out_dir> [data_path]");
        return ExitCode::FAILURE;
    };
    let provider = match args.next() {
        Some(path) => DataProvider::File(path),
        None => DataProvider::Embedded,
    };

    match export(Path::new(&out_dir), &provider) {
        Ok(count) => {
            info!("Exported {count} pages to {out_dir}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Export failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn export(out_dir: &Path, provider: &DataProvider) -> Result<usize, Box<dyn std::error::Error>> {
    let catalog = provider.load()?;
    let linker = EntityLinker::from_catalog(&catalog);
    let mut count = 0;

    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join("index.html"), pages::home(&catalog))?;
    count += 1;

    for collection in Collection::ALL {
        let dir = out_dir.join(collection.path_segment());
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join("index.html"),
            pages::collection_index(&catalog, collection),
        )?;
        count += 1;

        let names: Vec<String> = catalog.names(collection).map(String::from).collect();
        for name in names {
            let slug = slugify(&name);
            let page = pages::detail(&catalog, &linker, collection, &slug);
            fs::write(dir.join(format!("{slug}.html")), page)?;
            count += 1;
        }
    }

    Ok(count)
}
