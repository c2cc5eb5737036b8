use anyhow::{Context, Result};
use copyforge_config::Config;
use copyforge_engine::{
    ArticleOptions, FsContentStore, PageContext, PageTemplate, Publisher, RenderOptions,
    RenderedArticle, SiteInfo, io, render_html, render_with,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Command {
    Render(PathBuf),
    Page(PathBuf),
    Stats(PathBuf),
    Publish(PathBuf),
    /// Output directory, and where to write the config (default location
    /// when `None`).
    Init {
        output_dir: PathBuf,
        config_path: Option<PathBuf>,
    },
}

impl Command {
    /// Runs the command and returns what should be printed.
    pub fn execute(self, config: Option<&Config>) -> Result<String> {
        match self {
            Command::Render(file) => render_body(&file, config),
            Command::Page(file) => render_page(&file, config),
            Command::Stats(file) => stats(&file, config),
            Command::Publish(target) => {
                let config = config.with_context(|| {
                    format!(
                        "publish needs a config file (see `init`), looked at {}",
                        Config::config_path().display()
                    )
                })?;
                publish(&target, config)
            }
            Command::Init {
                output_dir,
                config_path,
            } => init(&output_dir, config_path.unwrap_or_else(Config::config_path)),
        }
    }
}

fn read_source(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn article_options(config: Option<&Config>) -> ArticleOptions {
    match config {
        Some(c) => ArticleOptions {
            render: RenderOptions {
                escape_html: c.escape_html,
            },
            words_per_minute: c.words_per_minute,
        },
        None => ArticleOptions::default(),
    }
}

fn load_template(config: Option<&Config>) -> Result<PageTemplate> {
    match config.and_then(|c| c.template_path.as_ref()) {
        Some(path) => {
            let source = read_source(path)?;
            PageTemplate::parse(&source)
                .with_context(|| format!("Invalid page template {}", path.display()))
        }
        None => Ok(PageTemplate::builtin()),
    }
}

fn site_info(config: &Config) -> SiteInfo {
    SiteInfo {
        site_name: config.site_name.clone(),
        base_url: config.base_url.clone(),
        default_author: config.author.clone(),
    }
}

fn render_body(file: &Path, config: Option<&Config>) -> Result<String> {
    let source = read_source(file)?;
    let (_, body) = copyforge_engine::extract(&source);
    let blocks = render_with(body, article_options(config).render);
    Ok(render_html(&blocks))
}

fn render_page(file: &Path, config: Option<&Config>) -> Result<String> {
    let source = read_source(file)?;
    let template = load_template(config)?;
    let article = RenderedArticle::from_document(&source, article_options(config));
    let ctx = match config {
        Some(c) => PageContext {
            site_name: c.site_name.clone(),
            canonical_url: String::new(),
            default_author: c.author.clone(),
        },
        None => PageContext::default(),
    };
    Ok(template.assemble(&article, &ctx))
}

fn stats(file: &Path, config: Option<&Config>) -> Result<String> {
    let source = read_source(file)?;
    let article = RenderedArticle::from_document(&source, article_options(config));

    let mut out = String::new();
    for (key, value) in article.header.iter() {
        writeln!(out, "{key}: {value}")?;
    }
    writeln!(out, "blocks: {}", article.blocks.len())?;
    for block in &article.blocks {
        writeln!(out, "  {}", block.name())?;
    }
    writeln!(out, "words: {}", article.word_count)?;
    write!(out, "reading time: {} min", article.reading_time)?;
    Ok(out)
}

fn publish(target: &Path, config: &Config) -> Result<String> {
    let files = if target.is_dir() {
        io::scan_markdown_files(target)?
    } else {
        vec![target.to_path_buf()]
    };

    let mut publisher = Publisher::new(
        FsContentStore::new(&config.output_dir),
        load_template(Some(config))?,
    )
    .with_options(article_options(Some(config)))
    .with_site(site_info(config));

    let mut out = String::new();
    let mut failed = 0usize;
    for file in &files {
        let stem = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let result = read_source(file)
            .and_then(|source| publisher.publish(&source, &stem).map_err(Into::into));
        match result {
            Ok(outcome) => writeln!(
                out,
                "{} -> {} ({} words, {} min)",
                file.display(),
                outcome.path,
                outcome.word_count,
                outcome.reading_time
            )?,
            Err(e) => {
                log::warn!("{}: {e:#}", file.display());
                failed += 1;
            }
        }
    }

    if failed < files.len() {
        let pages = publisher.publish_indexes()?;
        writeln!(out, "sitemap and index list {pages} pages")?;
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {} articles failed to publish", files.len());
    }
    Ok(out.trim_end().to_string())
}

fn init(output_dir: &Path, config_path: PathBuf) -> Result<String> {
    if config_path.exists() {
        anyhow::bail!("Config file already exists at {}", config_path.display());
    }
    Config::new(output_dir).save_to_path(&config_path)?;
    Ok(format!("Wrote {}", config_path.display()))
}
