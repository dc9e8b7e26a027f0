//! Workbench: the entry points a presentation layer drives.
//!
//! Owns the catalog, configuration, tokenizer and output dispatcher. Each
//! operation runs one engine, publishes a titled report to the registered
//! sinks, and returns the structured result.

pub mod report;

use std::sync::Arc;

use fabula_core::config::FabulaConfig;
use fabula_core::errors::{AnalysisError, ArgumentError, LanguageError};
use fabula_core::events::{
    AdvisoryOutput, ListingOutput, OutputDispatcher, OutputSink, ScoreOutput, TextOutput,
};
use fabula_core::types::Language;

use crate::catalog::SymbolCatalog;
use crate::collocations::{ngrams, NgramTable};
use crate::combinatorics::{CombinatoricsEngine, SizeEstimate};
use crate::cooccurrence::{analyze, prepare_words, CooccurrenceTable, StopwordSet};
use crate::frequency::{count_terms, FrequencyTable};
use crate::kwic::{self, KwicResult};
use crate::pragmatics::{analyze_indicators, HedgingLexicon, PragmaticIndicators};
use crate::readability::{self, ReadabilityResult, SentenceReadability};
use crate::tokenize::{RegexTokenizer, Tokenizer};

/// Caller-owned session state for the text engines.
pub struct Workbench {
    config: FabulaConfig,
    catalog: SymbolCatalog,
    tokenizer: Box<dyn Tokenizer>,
    dispatcher: OutputDispatcher,
    engine: CombinatoricsEngine,
    language: Language,
}

impl Workbench {
    /// Build a workbench with the default catalog and the regex tokenizer.
    pub fn new(config: FabulaConfig) -> Result<Self, AnalysisError> {
        let language = config.readability.effective_language()?;
        let engine = CombinatoricsEngine::from_config(&config.combinatorics);
        Ok(Self {
            config,
            catalog: SymbolCatalog::default(),
            tokenizer: Box::new(RegexTokenizer::new()),
            dispatcher: OutputDispatcher::new(),
            engine,
            language,
        })
    }

    /// Swap in another tokenizer collaborator.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &FabulaConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn register_sink(&mut self, sink: Arc<dyn OutputSink>) {
        self.dispatcher.register(sink);
    }

    /// Change the analysis language. An unknown tag keeps the current one.
    pub fn set_language(&mut self, tag: &str) -> Result<Language, LanguageError> {
        let language = tag.parse::<Language>()?;
        self.language = language;
        self.dispatcher.emit_text(&TextOutput {
            title: "Language".to_string(),
            body: format!("Analysis language: {language}"),
        });
        Ok(language)
    }

    /// Replace the active catalog with a user-defined one.
    pub fn replace_catalog(&mut self, catalog: SymbolCatalog) {
        tracing::info!(entries = catalog.len(), "catalog replaced");
        self.catalog = catalog;
        self.publish_catalog("Custom catalog");
    }

    /// Return to the built-in 31-function catalog.
    pub fn reset_catalog(&mut self) {
        self.catalog = SymbolCatalog::default();
        tracing::info!("catalog reset to defaults");
        self.publish_catalog("Default catalog");
    }

    fn publish_catalog(&self, title: &str) {
        self.dispatcher.emit_text(&TextOutput {
            title: title.to_string(),
            body: report::catalog_body(&self.catalog),
        });
    }

    /// First phase for permutations. Codes are checked against the active
    /// catalog before anything is estimated; a [`CapacityWarning`] on the
    /// estimate is also published as an advisory.
    ///
    /// [`CapacityWarning`]: crate::combinatorics::CapacityWarning
    pub fn estimate_permutations<S: AsRef<str>>(
        &self,
        codes: &[S],
    ) -> Result<SizeEstimate, AnalysisError> {
        if self.catalog.resolve(codes)?.is_empty() {
            return Err(ArgumentError::EmptyInput { field: "codes" }.into());
        }
        let estimate = self.engine.estimate_permutations(codes);
        self.advise_capacity(&estimate);
        Ok(estimate)
    }

    /// Second phase for permutations: enumerate up to the display limit
    /// and publish the listing with the full total.
    #[tracing::instrument(skip(self, codes), fields(input_codes = codes.len()))]
    pub fn execute_permutations<S: AsRef<str>>(
        &self,
        codes: &[S],
    ) -> Result<ListingOutput, AnalysisError> {
        let iter = self.engine.permute_iter(codes, &self.catalog)?;
        let total = saturate(iter.total());
        let items: Vec<String> = iter.take(self.display_limit()).collect();
        let listing = ListingOutput {
            title: format!("Permutations of {} functions", codes.len()),
            items,
            total,
        };
        self.publish_listing(&listing);
        Ok(listing)
    }

    /// First phase for combinations.
    pub fn estimate_combinations<S: AsRef<str>>(
        &self,
        available: &[S],
        choose: usize,
    ) -> Result<SizeEstimate, AnalysisError> {
        self.catalog.resolve(available)?;
        let estimate = self.engine.estimate_combinations(available, choose)?;
        self.advise_capacity(&estimate);
        Ok(estimate)
    }

    /// Second phase for combinations.
    #[tracing::instrument(skip(self, available), fields(input_codes = available.len()))]
    pub fn execute_combinations<S: AsRef<str>>(
        &self,
        available: &[S],
        choose: usize,
    ) -> Result<ListingOutput, AnalysisError> {
        let iter = self.engine.combine_iter(available, choose, &self.catalog)?;
        let total = saturate(iter.total());
        let items: Vec<String> = iter.take(self.display_limit()).collect();
        let listing = ListingOutput {
            title: format!("Combinations of {choose} from {} functions", available.len()),
            items,
            total,
        };
        self.publish_listing(&listing);
        Ok(listing)
    }

    /// Co-occurrence over the words of `text`, stopwords removed when
    /// configured.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn run_cooccurrence(&self, text: &str) -> Result<CooccurrenceTable, AnalysisError> {
        require_text(text)?;
        let settings = &self.config.cooccurrence;
        let window_size = settings.effective_window_size();
        let words = self.words(text, settings.effective_remove_stopwords());
        let table = analyze(&words, window_size)?;

        self.dispatcher.emit_text(&TextOutput {
            title: "Co-occurrence analysis".to_string(),
            body: report::cooccurrence_body(&table, window_size, settings.effective_top_pairs()),
        });
        Ok(table)
    }

    /// Term counts over the words of `text`. The report lists the
    /// configured number of top terms.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn run_term_frequency(&self, text: &str) -> Result<FrequencyTable, AnalysisError> {
        require_text(text)?;
        let settings = &self.config.frequency;
        let top = settings.effective_top_terms();
        if top == 0 {
            return Err(ArgumentError::TooSmall {
                field: "top_terms",
                value: top,
                min: 1,
            }
            .into());
        }
        let words = self.words(text, settings.effective_remove_stopwords());
        let table = count_terms(&words);

        self.dispatcher.emit_text(&TextOutput {
            title: "Term frequency".to_string(),
            body: report::frequency_body(&table.top(top), table.total_words()),
        });
        Ok(table)
    }

    /// N-gram collocations over the words of `text`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn run_collocations(&self, text: &str) -> Result<NgramTable, AnalysisError> {
        require_text(text)?;
        let settings = &self.config.collocations;
        let words = self.words(text, settings.effective_remove_stopwords());
        let table = ngrams(&words, settings.effective_ngram_size())?;

        self.dispatcher.emit_text(&TextOutput {
            title: "Collocations".to_string(),
            body: report::collocations_body(&table, settings.effective_top_collocations()),
        });
        Ok(table)
    }

    /// Sentence-length flags, repeated words and hedging terms for `text`.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn run_pragmatic_indicators(
        &self,
        text: &str,
    ) -> Result<PragmaticIndicators, AnalysisError> {
        require_text(text)?;
        let mut lexicon = HedgingLexicon::for_language(self.language);
        lexicon.extend(&self.config.indicators.extra_hedging_terms);
        let indicators =
            analyze_indicators(self.tokenizer.as_ref(), text, self.language, &lexicon);

        self.dispatcher.emit_text(&TextOutput {
            title: "Conversational indicators".to_string(),
            body: report::indicators_body(&indicators),
        });
        Ok(indicators)
    }

    /// Keyword-in-context lines for `target` in `text`.
    #[tracing::instrument(skip(self, text, target), fields(text_len = text.len(), keyword = target.trim()))]
    pub fn run_kwic(&self, text: &str, target: &str) -> Result<KwicResult, AnalysisError> {
        require_text(text)?;
        let width = self.config.kwic.effective_context_width();
        let tokens = self.tokenizer.tokens(text, self.language);
        let result = kwic::find(&tokens, target, width, self.config.kwic.effective_max_results())?;

        self.dispatcher.emit_text(&TextOutput {
            title: format!("KWIC: {}", target.trim()),
            body: report::kwic_body(&result, target, width),
        });
        Ok(result)
    }

    /// Readability of the whole text.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn readability_global(&self, text: &str) -> Result<ReadabilityResult, AnalysisError> {
        require_text(text)?;
        self.advise_language();
        let result = readability::score_corpus(self.tokenizer.as_ref(), text, self.language)?;

        self.dispatcher.emit_score(&ScoreOutput {
            title: "Global readability".to_string(),
            score: result.score,
            letters: result.letters,
            words: result.words,
            sentences: result.sentences,
        });
        self.dispatcher.emit_text(&TextOutput {
            title: "Global readability".to_string(),
            body: report::readability_body(&result, self.language),
        });
        Ok(result)
    }

    /// Readability of every sentence, each scored as a one-sentence unit.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn readability_per_sentence(
        &self,
        text: &str,
    ) -> Result<Vec<SentenceReadability>, AnalysisError> {
        require_text(text)?;
        self.advise_language();
        let rows = readability::score_sentences(self.tokenizer.as_ref(), text, self.language);
        if rows.is_empty() {
            return Err(ArgumentError::EmptyInput { field: "sentences" }.into());
        }

        self.dispatcher.emit_text(&TextOutput {
            title: "Readability per sentence".to_string(),
            body: report::sentence_readability_body(
                &rows,
                self.config.readability.effective_max_sentences_listed(),
                self.language,
            ),
        });
        Ok(rows)
    }

    /// Lower-cased word tokens of `text`. Stopwords are the built-in list
    /// for the active language plus `cooccurrence.extra_stopwords`.
    fn words(&self, text: &str, remove_stopwords: bool) -> Vec<String> {
        let stopwords = remove_stopwords.then(|| {
            let mut set = StopwordSet::for_language(self.language);
            set.extend(&self.config.cooccurrence.extra_stopwords);
            set
        });
        let tokens = self.tokenizer.tokens(text, self.language);
        prepare_words(&tokens, stopwords.as_ref())
    }

    fn display_limit(&self) -> usize {
        self.config.combinatorics.effective_display_limit()
    }

    fn publish_listing(&self, listing: &ListingOutput) {
        tracing::debug!(shown = listing.items.len(), total = listing.total, "listing ready");
        self.dispatcher.emit_listing(listing);
        self.dispatcher.emit_text(&TextOutput {
            title: listing.title.clone(),
            body: report::listing_body(listing),
        });
    }

    fn advise_capacity(&self, estimate: &SizeEstimate) {
        if let Some(ref warning) = estimate.warning {
            self.dispatcher.emit_advisory(&AdvisoryOutput {
                title: "Large result set".to_string(),
                message: warning.to_string(),
            });
        }
    }

    fn advise_language(&self) {
        if !self.language.matches_readability_calibration() {
            self.dispatcher.emit_advisory(&AdvisoryOutput {
                title: "Language mismatch".to_string(),
                message: report::calibration_note(self.language),
            });
        }
    }
}

fn require_text(text: &str) -> Result<(), ArgumentError> {
    if text.trim().is_empty() {
        return Err(ArgumentError::EmptyInput { field: "text" });
    }
    Ok(())
}

fn saturate(total: Option<u128>) -> u64 {
    total
        .and_then(|t| u64::try_from(t).ok())
        .unwrap_or(u64::MAX)
}
