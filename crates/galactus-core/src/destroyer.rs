//! Prunes an installed package tree down to the modules a keep policy accepts.

use crate::error::DestroyError;
use crate::kept::{self, KeptModules};
use crate::policy::{DefaultKeepPolicy, KeepPolicy, should_keep_module};
use crate::prune::{self, PruneReport};
use crate::reporter::{NullReporter, Reporter};
use crate::walker::{ModuleTreeProvider, Walker};
use galactus_schema::Module;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Where the module list comes from.
pub enum TreeSource {
    /// Walk the package in this directory with the default [`Walker`].
    RootDirectory(PathBuf),
    /// Use an existing provider as-is.
    Walker(Arc<dyn ModuleTreeProvider>),
}

impl std::fmt::Debug for TreeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootDirectory(path) => f.debug_tuple("RootDirectory").field(path).finish(),
            Self::Walker(walker) => f
                .debug_tuple("Walker")
                .field(&walker.root_module_path())
                .finish(),
        }
    }
}

/// Removes every installed module a [`KeepPolicy`] rejects, recursing into
/// the nested `node_modules` of the modules it keeps.
///
/// ```no_run
/// # async fn run() -> Result<(), galactus_core::DestroyError> {
/// use galactus_core::DestroyerOfModules;
///
/// let destroyer = DestroyerOfModules::builder()
///     .root_directory("path/to/package")
///     .build()?;
/// let report = destroyer.destroy().await?;
/// println!("removed {} subtrees", report.removed.len());
/// # Ok(())
/// # }
/// ```
pub struct DestroyerOfModules {
    walker: Arc<dyn ModuleTreeProvider>,
    should_keep: Arc<dyn KeepPolicy>,
    reporter: Arc<dyn Reporter>,
    concurrency: usize,
}

impl std::fmt::Debug for DestroyerOfModules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DestroyerOfModules")
            .field("root", &self.walker.root_module_path())
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl DestroyerOfModules {
    /// Create a destroyer with the default keep policy.
    pub fn new(source: TreeSource) -> Self {
        let walker: Arc<dyn ModuleTreeProvider> = match source {
            TreeSource::RootDirectory(root) => Arc::new(Walker::new(root)),
            TreeSource::Walker(walker) => walker,
        };

        Self {
            walker,
            should_keep: Arc::new(DefaultKeepPolicy),
            reporter: Arc::new(NullReporter),
            concurrency: num_cpus::get(),
        }
    }

    /// Start building a destroyer from optional parts.
    pub fn builder() -> DestroyerBuilder {
        DestroyerBuilder::default()
    }

    /// Replace the keep policy.
    #[must_use]
    pub fn with_keep_policy(mut self, policy: impl KeepPolicy + 'static) -> Self {
        self.should_keep = Arc::new(policy);
        self
    }

    /// Report progress to `reporter`.
    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Limit how many subtrees are removed at once.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The provider the module list is read from.
    pub fn walker(&self) -> &dyn ModuleTreeProvider {
        self.walker.as_ref()
    }

    /// Whether the effective keep policy accepts `module`.
    pub fn should_keep_module(&self, module: &Module) -> bool {
        should_keep_module(self.should_keep.as_ref(), module)
    }

    /// Walk the tree and index every module the keep policy accepts.
    ///
    /// Does not modify the filesystem.
    ///
    /// # Errors
    ///
    /// Propagates tree walk failures, and fails if the root cannot be
    /// canonicalized when `relative_paths` is set.
    pub async fn collect_kept_modules(
        &self,
        relative_paths: bool,
    ) -> Result<KeptModules, DestroyError> {
        kept::collect_kept_modules(self.walker.as_ref(), self.should_keep.as_ref(), relative_paths)
            .await
    }

    /// Prune the tree rooted at `path` against `kept`.
    ///
    /// # Errors
    ///
    /// Returns the first directory read or removal failure.
    pub async fn destroy_module(
        &self,
        path: &Path,
        kept: &KeptModules,
    ) -> Result<PruneReport, DestroyError> {
        prune::destroy_module(path, kept, self.concurrency, self.reporter.as_ref()).await
    }

    /// Compute what [`destroy`](Self::destroy) would remove, without
    /// removing anything.
    ///
    /// # Errors
    ///
    /// Propagates tree walk and directory read failures.
    pub async fn plan(&self) -> Result<PruneReport, DestroyError> {
        let start = Instant::now();
        let root = self.walker.root_module_path().to_path_buf();
        self.reporter.walking(&root);

        let kept = self.collect_kept_modules(false).await?;
        let report = prune::plan_module(&root, &kept).await?;
        for path in &report.removed {
            self.reporter.removing(path);
        }

        self.reporter.summary(
            report.removed.len(),
            report.kept,
            start.elapsed().as_secs_f64(),
        );
        Ok(report)
    }

    /// Walk the tree, then remove every module the keep policy rejects.
    ///
    /// # Errors
    ///
    /// Propagates tree walk, directory read, and removal failures. A failure
    /// part way through leaves the tree partially pruned; running again
    /// finishes the job.
    pub async fn destroy(&self) -> Result<PruneReport, DestroyError> {
        let start = Instant::now();
        let root = self.walker.root_module_path().to_path_buf();
        self.reporter.walking(&root);

        let kept = self.collect_kept_modules(false).await?;
        let report = self.destroy_module(&root, &kept).await?;

        tracing::info!(
            "Pruned {}: removed {} subtrees, kept {} modules",
            root.display(),
            report.removed.len(),
            report.kept
        );
        self.reporter.summary(
            report.removed.len(),
            report.kept,
            start.elapsed().as_secs_f64(),
        );
        Ok(report)
    }
}

/// Options for [`DestroyerOfModules`].
///
/// One of [`root_directory`](Self::root_directory) or
/// [`walker`](Self::walker) is required; when both are given the root
/// directory wins.
#[derive(Default)]
pub struct DestroyerBuilder {
    root_directory: Option<PathBuf>,
    walker: Option<Arc<dyn ModuleTreeProvider>>,
    should_keep_module_test: Option<Arc<dyn KeepPolicy>>,
    reporter: Option<Arc<dyn Reporter>>,
    concurrency: Option<usize>,
}

impl DestroyerBuilder {
    /// Walk the package in `root` with the default [`Walker`].
    #[must_use]
    pub fn root_directory(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_directory = Some(root.into());
        self
    }

    /// Read modules from an existing provider.
    #[must_use]
    pub fn walker(mut self, walker: Arc<dyn ModuleTreeProvider>) -> Self {
        self.walker = Some(walker);
        self
    }

    /// Override the default keep policy.
    #[must_use]
    pub fn should_keep_module_test(mut self, policy: impl KeepPolicy + 'static) -> Self {
        self.should_keep_module_test = Some(Arc::new(policy));
        self
    }

    /// Report progress to `reporter`.
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Limit how many subtrees are removed at once.
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Resolve the options into a destroyer.
    ///
    /// # Errors
    ///
    /// Returns [`DestroyError::MissingSource`] if neither a root directory
    /// nor a walker was supplied.
    pub fn build(self) -> Result<DestroyerOfModules, DestroyError> {
        let source = match (self.root_directory, self.walker) {
            (Some(root), _) => TreeSource::RootDirectory(root),
            (None, Some(walker)) => TreeSource::Walker(walker),
            (None, None) => return Err(DestroyError::MissingSource),
        };

        let mut destroyer = DestroyerOfModules::new(source);
        if let Some(policy) = self.should_keep_module_test {
            destroyer.should_keep = policy;
        }
        if let Some(reporter) = self.reporter {
            destroyer.reporter = reporter;
        }
        if let Some(concurrency) = self.concurrency {
            destroyer = destroyer.with_concurrency(concurrency);
        }
        Ok(destroyer)
    }
}
