//! # Publishing
//!
//! The seam between the rendering engine and the outside world. Content
//! storage and text generation are traits ([`ContentStore`],
//! [`TextGenerator`]); this crate only ships the directory-backed store.
//! [`Publisher`] renders a document, wraps it in a page and stores it.

pub mod generator;
pub mod index;
pub mod stamp;
pub mod store;

pub use generator::{GenerationError, TextGenerator};
pub use stamp::Stamp;
pub use store::{ContentStore, FsContentStore, StoreError};

use std::collections::HashSet;

use chrono::NaiveDate;
use relative_path::{RelativePath, RelativePathBuf};

use crate::{
    article::{ArticleOptions, RenderedArticle},
    assemble::{PageContext, PageTemplate},
    parsing::{frontmatter, reading_time},
    slug::slugify,
};

/// Folder published articles are written to, below the store root.
pub const ARTICLES_FOLDER: &str = "articles";

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Document rendered to no content")]
    EmptyDocument,
    #[error("{path} was already published in this run")]
    DuplicatePath { path: RelativePathBuf },
    #[error("Content store rejected {path}")]
    StoreRejected { path: RelativePathBuf },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Result of one successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// Store path the page was written to.
    pub path: RelativePathBuf,
    pub word_count: usize,
    pub reading_time: u32,
}

/// Site-wide values applied to every page a [`Publisher`] writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInfo {
    pub site_name: String,
    /// Prefix for canonical URLs; empty leaves them blank.
    pub base_url: String,
    pub default_author: Option<String>,
}

pub struct Publisher<S> {
    store: S,
    template: PageTemplate,
    options: ArticleOptions,
    site: SiteInfo,
    folder: RelativePathBuf,
    date: NaiveDate,
    written: HashSet<RelativePathBuf>,
}

impl<S: ContentStore> Publisher<S> {
    /// A publisher dated today (UTC).
    pub fn new(store: S, template: PageTemplate) -> Self {
        Self {
            store,
            template,
            options: ArticleOptions::default(),
            site: SiteInfo::default(),
            folder: RelativePathBuf::from(ARTICLES_FOLDER),
            date: chrono::Utc::now().date_naive(),
            written: HashSet::new(),
        }
    }

    pub fn with_options(mut self, options: ArticleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_site(mut self, site: SiteInfo) -> Self {
        self.site = site;
        self
    }

    /// Publication date stamped onto file names, headers and the sitemap.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Slug for a document: the `slug` header, then the title, then
    /// `fallback_name` (usually the source file stem).
    pub fn slug_for(header: &frontmatter::Header, fallback_name: &str) -> String {
        let source = header
            .get("slug")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| header.get("title").filter(|t| !t.trim().is_empty()))
            .unwrap_or(fallback_name);
        slugify(source)
    }

    /// Store path for a stamped article: `<folder>/<date>-<slug>.html`.
    pub fn path_for(&self, stamp: &Stamp) -> RelativePathBuf {
        self.folder.join(stamp.file_name())
    }

    fn canonical_url(&self, path: &RelativePath) -> String {
        if self.site.base_url.is_empty() {
            return String::new();
        }
        index::page_url(&self.site.base_url, path)
    }

    fn stamp_for(&self, document: &str, fallback_name: &str) -> Stamp {
        let (header, body) = frontmatter::extract(document);
        Stamp::new(
            self.date,
            Self::slug_for(&header, fallback_name),
            reading_time::word_count(body),
        )
    }

    /// Renders `document`, assembles the page and writes it to the store.
    ///
    /// The article is stamped first: `{{DATE}}`/`{{SLUG}}`/`{{WORD_COUNT}}`
    /// are filled and the header's `date` and `word_count` replaced. Each
    /// path is written at most once per publisher.
    pub fn publish(
        &mut self,
        document: &str,
        fallback_name: &str,
    ) -> Result<PublishOutcome, PublishError> {
        let stamp = self.stamp_for(document, fallback_name);
        let document = stamp.fill_placeholders(document);
        let mut article = RenderedArticle::from_document(&document, self.options);
        if article.blocks.is_empty() {
            return Err(PublishError::EmptyDocument);
        }
        stamp.apply_to(&mut article.header);

        let path = self.path_for(&stamp);
        if self.written.contains(&path) {
            return Err(PublishError::DuplicatePath { path });
        }

        let ctx = PageContext {
            site_name: self.site.site_name.clone(),
            canonical_url: self.canonical_url(&path),
            default_author: self.site.default_author.clone(),
        };
        let page = self.template.assemble(&article, &ctx);

        log::debug!(
            "publishing {path}: {} blocks, {} words",
            article.blocks.len(),
            article.word_count
        );
        if !self.store.store(&path, &page, &format!("Publish {path}")) {
            return Err(PublishError::StoreRejected { path });
        }
        self.written.insert(path.clone());

        Ok(PublishOutcome {
            path,
            word_count: article.word_count,
            reading_time: article.reading_time,
        })
    }

    /// Rebuilds `sitemap.xml` and the article index from the store's
    /// current contents. Returns the number of pages listed.
    pub fn publish_indexes(&self) -> Result<usize, PublishError> {
        let mut pages = self.store.list(&self.folder)?;
        pages.extend(self.store.list(RelativePath::new(index::TOOLS_FOLDER))?);
        pages.retain(|p| index::is_page(p));

        let lastmod = self.date.format(stamp::DATE_FORMAT).to_string();
        let sitemap = index::build_sitemap(&pages, &self.site.base_url, &lastmod);
        self.store_page(RelativePath::new(index::SITEMAP_PATH), &sitemap, "Update sitemap")?;

        let articles: Vec<_> = pages
            .iter()
            .filter(|p| p.starts_with(&self.folder))
            .collect();
        let listing =
            index::build_articles_index(&articles, &self.site.base_url, &self.site.site_name);
        self.store_page(
            &self.folder.join(index::INDEX_FILE),
            &listing,
            "Update articles index",
        )?;

        log::info!("indexed {} pages", pages.len());
        Ok(pages.len())
    }

    fn store_page(&self, path: &RelativePath, content: &str, message: &str) -> Result<(), PublishError> {
        if self.store.store(path, content, message) {
            Ok(())
        } else {
            Err(PublishError::StoreRejected {
                path: path.to_relative_path_buf(),
            })
        }
    }
}

/// Asks `generator` for an article and publishes whatever comes back.
pub fn generate_and_publish<G, S>(
    generator: &G,
    prompt: &str,
    publisher: &mut Publisher<S>,
    fallback_name: &str,
) -> Result<PublishOutcome, PublishError>
where
    G: TextGenerator + ?Sized,
    S: ContentStore,
{
    let document = generator.generate_text(prompt)?;
    if document.trim().is_empty() {
        return Err(GenerationError::Empty.into());
    }
    publisher.publish(&document, fallback_name)
}
