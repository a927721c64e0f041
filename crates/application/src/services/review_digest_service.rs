//! Cached read operations and prefetch sweeps
//!
//! Every read follows the same cache-aside shape: consult the result cache
//! under a normalized composite key, and on a miss fetch upstream, compute,
//! store, and return. Sweeps walk the upstream catalog page by page and warm
//! the same paths, pausing between calls to stay polite.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::{CourseCode, GradeDistribution, ProfessorName};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{
    CacheKey, CacheTable, ProfessorRatings, ResultCacheExt, ResultCachePort, ReviewFetcher,
    ReviewProviderPort, ReviewSummary, ttl,
};
use crate::services::summary_pipeline::SummaryPipeline;

/// Per-table cache validity windows
#[derive(Debug, Clone)]
pub struct TtlSettings {
    pub course_reviews: Duration,
    pub course_grades: Duration,
    pub professor_ratings: Duration,
    pub professor_grades: Duration,
}

impl Default for TtlSettings {
    fn default() -> Self {
        Self {
            course_reviews: ttl::DEFAULT,
            course_grades: ttl::DEFAULT,
            professor_ratings: ttl::DEFAULT,
            professor_grades: ttl::DEFAULT,
        }
    }
}

/// Pacing for the prefetch sweeps
#[derive(Debug, Clone)]
pub struct SweepSettings {
    /// Catalog page size
    pub page_size: u32,
    /// Pause after each catalog page
    pub page_delay: Duration,
    /// Pause after each warmed entity
    pub entity_delay: Duration,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            page_size: 100,
            page_delay: Duration::from_secs(4),
            entity_delay: Duration::from_secs(5),
        }
    }
}

/// Orchestrates the cached read operations over the provider, the cache and
/// the summarization pipeline
pub struct ReviewDigestService {
    cache: Arc<dyn ResultCachePort>,
    provider: Arc<dyn ReviewProviderPort>,
    pipeline: Arc<SummaryPipeline>,
    ttls: TtlSettings,
    sweep: SweepSettings,
}

impl ReviewDigestService {
    pub fn new(
        cache: Arc<dyn ResultCachePort>,
        provider: Arc<dyn ReviewProviderPort>,
        pipeline: Arc<SummaryPipeline>,
        ttls: TtlSettings,
        sweep: SweepSettings,
    ) -> Self {
        Self {
            cache,
            provider,
            pipeline,
            ttls,
            sweep,
        }
    }

    /// Warm the cache for every course in the upstream catalog.
    ///
    /// Pagination failures abort the sweep; per-course failures are logged
    /// and skipped so one bad record cannot stall the rest.
    #[instrument(skip(self))]
    pub async fn prefetch_all_courses(&self) -> Result<(), ApplicationError> {
        let courses = self.collect_catalog(CatalogKind::Courses).await?;
        info!(count = courses.len(), "course sweep starting");

        for course in &courses {
            if let Err(error) = self.course_grades(course, None).await {
                warn!(%course, %error, "course prefetch failed, skipping");
            }
            tokio::time::sleep(self.sweep.entity_delay).await;
        }
        info!("course sweep finished");
        Ok(())
    }

    /// Warm the cache for every professor in the upstream catalog
    #[instrument(skip(self))]
    pub async fn prefetch_all_professors(&self) -> Result<(), ApplicationError> {
        let professors = self.collect_catalog(CatalogKind::Professors).await?;
        info!(count = professors.len(), "professor sweep starting");

        for professor in &professors {
            // Both cached ratings shapes are warmed
            if let Err(error) = self.professor_ratings(professor, true).await {
                warn!(%professor, %error, "professor reviews prefetch failed, skipping");
            }
            if let Err(error) = self.professor_ratings(professor, false).await {
                warn!(%professor, %error, "professor ratings prefetch failed, skipping");
            }
            if let Err(error) = self.professor_grades(professor).await {
                warn!(%professor, %error, "professor grades prefetch failed, skipping");
            }
            tokio::time::sleep(self.sweep.entity_delay).await;
        }
        info!("professor sweep finished");
        Ok(())
    }

    /// Page through one upstream catalog until an empty page, deduplicating
    /// while preserving a stable order
    async fn collect_catalog(
        &self,
        kind: CatalogKind,
    ) -> Result<BTreeSet<String>, ApplicationError> {
        let mut names = BTreeSet::new();
        let mut offset = 0;
        loop {
            let page = match kind {
                CatalogKind::Courses => {
                    self.provider.courses(self.sweep.page_size, offset).await?
                },
                CatalogKind::Professors => {
                    self.provider
                        .professors(self.sweep.page_size, offset)
                        .await?
                },
            };
            if page.is_empty() {
                break;
            }
            offset += self.sweep.page_size;
            names.extend(page);
            tokio::time::sleep(self.sweep.page_delay).await;
        }
        Ok(names)
    }
}

#[derive(Debug, Clone, Copy)]
enum CatalogKind {
    Courses,
    Professors,
}

impl std::fmt::Debug for ReviewDigestService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewDigestService")
            .field("ttls", &self.ttls)
            .field("sweep", &self.sweep)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ReviewFetcher for ReviewDigestService {
    #[instrument(skip(self))]
    async fn course_reviews(
        &self,
        course: &str,
        professor: &str,
    ) -> Result<ReviewSummary, ApplicationError> {
        let course = CourseCode::new(course)?;
        let professor = ProfessorName::new(professor)?;
        let key = CacheKey::new(course.as_str(), professor.as_str());

        if let Some(cached) = self
            .cache
            .get::<ReviewSummary>(CacheTable::CourseReviews, &key, self.ttls.course_reviews)
            .await?
        {
            debug!("course reviews served from cache");
            return Ok(cached);
        }

        let record = self.provider.course(course.as_str()).await?;
        let texts: Vec<String> = record
            .reviews
            .into_iter()
            .filter(|r| professor.matches(&r.professor))
            .map(|r| r.review)
            .collect();

        let summary = ReviewSummary {
            summarized: self.pipeline.summarize(texts).await?,
        };
        self.cache
            .put(CacheTable::CourseReviews, &key, &summary)
            .await?;
        Ok(summary)
    }

    #[instrument(skip(self))]
    async fn course_grades(
        &self,
        course: &str,
        professor: Option<&str>,
    ) -> Result<GradeDistribution, ApplicationError> {
        let course = CourseCode::new(course)?;
        let professor = professor.map(ProfessorName::new).transpose()?;
        let key = CacheKey::new(
            course.as_str(),
            professor.as_ref().map_or("", ProfessorName::as_str),
        );

        if let Some(cached) = self
            .cache
            .get::<GradeDistribution>(CacheTable::CourseGrades, &key, self.ttls.course_grades)
            .await?
        {
            debug!("course grades served from cache");
            return Ok(cached);
        }

        let sections = self
            .provider
            .grades(
                Some(course.as_str()),
                professor.as_ref().map(ProfessorName::as_str),
            )
            .await?;
        let distribution = GradeDistribution::aggregate(&sections);
        self.cache
            .put(CacheTable::CourseGrades, &key, &distribution)
            .await?;
        Ok(distribution)
    }

    #[instrument(skip(self))]
    async fn professor_ratings(
        &self,
        professor: &str,
        reviews: bool,
    ) -> Result<ProfessorRatings, ApplicationError> {
        let professor = ProfessorName::new(professor)?;
        // The two response shapes are cached as distinct rows
        let key = CacheKey::new(professor.as_str(), if reviews { "reviews" } else { "" });

        if let Some(cached) = self
            .cache
            .get::<ProfessorRatings>(
                CacheTable::ProfessorRatings,
                &key,
                self.ttls.professor_ratings,
            )
            .await?
        {
            debug!("professor ratings served from cache");
            return Ok(cached);
        }

        let record = self.provider.professor(professor.as_str(), reviews).await?;
        let summarized = if reviews {
            let texts: Vec<String> = record
                .reviews
                .unwrap_or_default()
                .into_iter()
                .map(|r| r.review)
                .collect();
            Some(self.pipeline.summarize(texts).await?)
        } else {
            None
        };

        let ratings = ProfessorRatings {
            average_rating: record.average_rating,
            summarized,
        };
        self.cache
            .put(CacheTable::ProfessorRatings, &key, &ratings)
            .await?;
        Ok(ratings)
    }

    #[instrument(skip(self))]
    async fn professor_grades(
        &self,
        professor: &str,
    ) -> Result<GradeDistribution, ApplicationError> {
        let professor = ProfessorName::new(professor)?;
        let key = CacheKey::primary_only(professor.as_str());

        if let Some(cached) = self
            .cache
            .get::<GradeDistribution>(
                CacheTable::ProfessorGrades,
                &key,
                self.ttls.professor_grades,
            )
            .await?
        {
            debug!("professor grades served from cache");
            return Ok(cached);
        }

        let sections = self
            .provider
            .grades(None, Some(professor.as_str()))
            .await?;
        let distribution = GradeDistribution::aggregate(&sections);
        self.cache
            .put(CacheTable::ProfessorGrades, &key, &distribution)
            .await?;
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::ports::{
        CourseRecord, GradeSection, ProfessorRecord, ProviderReview, SummarizerPort, SummaryMode,
    };
    use crate::services::summary_pipeline::PipelineSettings;

    #[derive(Debug, Default)]
    struct MemoryCache {
        rows: Mutex<HashMap<(CacheTable, CacheKey), Vec<u8>>>,
        puts: AtomicUsize,
    }

    #[async_trait]
    impl ResultCachePort for MemoryCache {
        async fn get_bytes(
            &self,
            table: CacheTable,
            key: &CacheKey,
            _ttl: Duration,
        ) -> Result<Option<Vec<u8>>, ApplicationError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .get(&(table, key.clone()))
                .cloned())
        }

        async fn put_bytes(
            &self,
            table: CacheTable,
            key: &CacheKey,
            value: Vec<u8>,
        ) -> Result<(), ApplicationError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            self.rows
                .lock()
                .unwrap()
                .insert((table, key.clone()), value);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct StubProvider {
        grade_calls: AtomicUsize,
        fail_grades: bool,
        course_pages: Mutex<Vec<Vec<String>>>,
        professor_pages: Mutex<Vec<Vec<String>>>,
    }

    #[async_trait]
    impl ReviewProviderPort for StubProvider {
        async fn course(&self, name: &str) -> Result<CourseRecord, ApplicationError> {
            Ok(CourseRecord {
                name: name.to_string(),
                reviews: vec![
                    ProviderReview {
                        professor: "Clyde Kruskal".to_string(),
                        review: "tough but fair".to_string(),
                    },
                    ProviderReview {
                        professor: "Nelson Padua-Perez".to_string(),
                        review: "great lectures".to_string(),
                    },
                ],
            })
        }

        async fn grades(
            &self,
            _course: Option<&str>,
            _professor: Option<&str>,
        ) -> Result<Vec<GradeSection>, ApplicationError> {
            self.grade_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_grades {
                return Err(ApplicationError::UpstreamFetch("HTTP 503".to_string()));
            }
            let mut section = GradeSection::new();
            section.insert("A".to_string(), 10);
            section.insert("B".to_string(), 5);
            Ok(vec![section])
        }

        async fn professor(
            &self,
            name: &str,
            reviews: bool,
        ) -> Result<ProfessorRecord, ApplicationError> {
            Ok(ProfessorRecord {
                name: name.to_string(),
                average_rating: Some(4.2),
                reviews: reviews.then(|| {
                    vec![ProviderReview {
                        professor: name.to_string(),
                        review: "engaging".to_string(),
                    }]
                }),
            })
        }

        async fn courses(
            &self,
            _limit: u32,
            _offset: u32,
        ) -> Result<Vec<String>, ApplicationError> {
            let mut pages = self.course_pages.lock().unwrap();
            if pages.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(pages.remove(0))
            }
        }

        async fn professors(
            &self,
            _limit: u32,
            _offset: u32,
        ) -> Result<Vec<String>, ApplicationError> {
            let mut pages = self.professor_pages.lock().unwrap();
            if pages.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(pages.remove(0))
            }
        }
    }

    #[derive(Debug, Default)]
    struct EchoSummarizer;

    #[async_trait]
    impl SummarizerPort for EchoSummarizer {
        async fn summarize(
            &self,
            texts: &[String],
            _sentences: u8,
            _mode: SummaryMode,
        ) -> Result<String, ApplicationError> {
            Ok(texts.join(" | "))
        }
    }

    fn service(
        cache: Arc<MemoryCache>,
        provider: Arc<StubProvider>,
    ) -> ReviewDigestService {
        let pipeline = Arc::new(SummaryPipeline::new(
            Arc::new(EchoSummarizer),
            PipelineSettings::default(),
        ));
        let sweep = SweepSettings {
            page_size: 2,
            page_delay: Duration::from_millis(0),
            entity_delay: Duration::from_millis(0),
        };
        ReviewDigestService::new(cache, provider, pipeline, TtlSettings::default(), sweep)
    }

    #[tokio::test]
    async fn second_call_is_served_from_cache() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider::default());
        let svc = service(cache.clone(), provider.clone());

        let first = svc.course_grades("cmsc132", None).await.unwrap();
        let second = svc.course_grades("CMSC132", None).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.grade_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_failure_leaves_cache_untouched() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider {
            fail_grades: true,
            ..StubProvider::default()
        });
        let svc = service(cache.clone(), provider);

        let err = svc.course_grades("CMSC132", None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::UpstreamFetch(_)));
        assert_eq!(cache.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn course_reviews_filter_by_professor() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider::default());
        let svc = service(cache, provider);

        let summary = svc.course_reviews("CMSC132", "Kruskal").await.unwrap();
        assert_eq!(summary.summarized, "tough but fair");
    }

    #[tokio::test]
    async fn professor_with_no_matching_reviews_gets_sentinel() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider::default());
        let svc = service(cache, provider);

        let summary = svc.course_reviews("CMSC132", "Nobody").await.unwrap();
        assert_eq!(
            summary.summarized,
            crate::services::summary_pipeline::NO_REVIEWS_SENTINEL
        );
    }

    #[tokio::test]
    async fn ratings_shapes_use_distinct_cache_rows() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider::default());
        let svc = service(cache.clone(), provider);

        let bare = svc.professor_ratings("Kruskal", false).await.unwrap();
        let with_reviews = svc.professor_ratings("Kruskal", true).await.unwrap();
        assert!(bare.summarized.is_none());
        assert_eq!(with_reviews.summarized.as_deref(), Some("engaging"));
        assert_eq!(cache.puts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn narrowed_and_broad_grades_do_not_collide() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider::default());
        let svc = service(cache, provider.clone());

        svc.course_grades("CMSC132", None).await.unwrap();
        svc.course_grades("CMSC132", Some("Kruskal")).await.unwrap();
        assert_eq!(provider.grade_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn course_sweep_pages_until_empty_and_dedupes() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider {
            course_pages: Mutex::new(vec![
                vec!["CMSC131".to_string(), "CMSC132".to_string()],
                vec!["CMSC132".to_string(), "CMSC216".to_string()],
            ]),
            ..StubProvider::default()
        });
        let svc = service(cache, provider.clone());

        svc.prefetch_all_courses().await.unwrap();
        // Three distinct courses warmed once each
        assert_eq!(provider.grade_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn professor_sweep_warms_both_ratings_shapes_and_grades() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider {
            professor_pages: Mutex::new(vec![vec!["Clyde Kruskal".to_string()]]),
            ..StubProvider::default()
        });
        let svc = service(cache.clone(), provider);

        svc.prefetch_all_professors().await.unwrap();
        // Reviews row, bare ratings row, and grades row
        assert_eq!(cache.puts.load(Ordering::SeqCst), 3);

        let rows = cache.rows.lock().unwrap();
        let prof = CacheKey::new("clyde kruskal", "reviews");
        let bare = CacheKey::primary_only("clyde kruskal");
        assert!(rows.contains_key(&(CacheTable::ProfessorRatings, prof)));
        assert!(rows.contains_key(&(CacheTable::ProfessorRatings, bare.clone())));
        assert!(rows.contains_key(&(CacheTable::ProfessorGrades, bare)));
    }

    #[tokio::test]
    async fn sweep_skips_failing_entities() {
        let cache = Arc::new(MemoryCache::default());
        let provider = Arc::new(StubProvider {
            fail_grades: true,
            course_pages: Mutex::new(vec![vec!["CMSC131".to_string()]]),
            ..StubProvider::default()
        });
        let svc = service(cache, provider);

        // Per-entity failures are swallowed; the sweep still completes
        svc.prefetch_all_courses().await.unwrap();
    }
}
