//! # In-Memory Dataset
//!
//! Dataset implementation backed by a plain vector. Used as the test
//! fixture and by the CLI demo commands; a deployment replaces it with a
//! datastore-backed implementation of the same trait.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{Dataset, DatasetError, DatasetResult, Entity, EventInfo, EventTier};
use super::{RankObservation, TitleOutcome, TitleRecord};

/// In-memory dataset over a fixed entity list and event catalog
///
/// `fail_all` flips every trait method into `DatasetError::Unavailable`,
/// which is how the fail-open validation tests inject collaborator outages.
pub struct InMemoryDataset {
    entities: Vec<Entity>,
    catalog: Vec<EventInfo>,
    fail_all: AtomicBool,
}

impl InMemoryDataset {
    /// Create a dataset over the given entities and catalog
    pub fn new(entities: Vec<Entity>, catalog: Vec<EventInfo>) -> Self {
        Self {
            entities,
            catalog,
            fail_all: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail (or recover)
    pub fn set_failing(&self, failing: bool) {
        self.fail_all.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> DatasetResult<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(DatasetError::Unavailable(
                "injected failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl Dataset for InMemoryDataset {
    fn count_by_nationality(&self) -> DatasetResult<HashMap<String, usize>> {
        self.check_available()?;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for entity in &self.entities {
            *counts.entry(entity.nationality.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn list_event_catalog(&self, tiers: &[EventTier]) -> DatasetResult<Vec<EventInfo>> {
        self.check_available()?;
        Ok(self
            .catalog
            .iter()
            .filter(|e| tiers.contains(&e.tier))
            .cloned()
            .collect())
    }

    fn list_distinct_tags(&self, cap: usize) -> DatasetResult<Vec<String>> {
        self.check_available()?;
        let mut tags: Vec<String> = Vec::new();
        for entity in &self.entities {
            for tag in &entity.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags.truncate(cap);
        Ok(tags)
    }

    fn fetch_entity_batch(&self, limit: usize) -> DatasetResult<Vec<Entity>> {
        self.check_available()?;
        // Insertion order is the stable order
        Ok(self.entities.iter().take(limit).cloned().collect())
    }
}

// ==================
// Sample Data
// ==================

fn event(id: &str, name: &str, tier: EventTier) -> EventInfo {
    EventInfo {
        id: id.to_string(),
        display_name: name.to_string(),
        tier,
    }
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    nationality: &str,
    active: (i32, i32),
    left_handed: bool,
    wins: &[(&str, i32)],
    best_rank: u32,
    tags: &[&str],
) -> Entity {
    Entity {
        id: id.to_string(),
        name: name.to_string(),
        nationality: nationality.to_string(),
        active_from: active.0,
        active_to: active.1,
        left_handed,
        titles: wins
            .iter()
            .map(|(event_id, year)| TitleRecord {
                event_id: event_id.to_string(),
                outcome: TitleOutcome::Won,
                year: *year,
            })
            .collect(),
        rank_history: vec![RankObservation {
            year: active.0 + 3,
            rank: best_rank,
        }],
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Build the bundled sample dataset
///
/// Small but deliberately dense: every nationality that appears has at
/// least three players, every catalog event has at least one winner, and
/// every decade band from the 1970s on is populated, so generated grids
/// have a realistic chance of validating.
pub fn sample_dataset() -> InMemoryDataset {
    let catalog = vec![
        event("australian-open", "Australian Open", EventTier::GrandSlam),
        event("roland-garros", "Roland Garros", EventTier::GrandSlam),
        event("wimbledon", "Wimbledon", EventTier::GrandSlam),
        event("us-open", "US Open", EventTier::GrandSlam),
        event("indian-wells", "Indian Wells", EventTier::Masters),
        event("miami", "Miami", EventTier::Masters),
        event("monte-carlo", "Monte Carlo", EventTier::Masters),
        event("madrid", "Madrid", EventTier::Masters),
        event("rome", "Rome", EventTier::Masters),
        event("canada", "Canada", EventTier::Masters),
        event("cincinnati", "Cincinnati", EventTier::Masters),
        event("shanghai", "Shanghai", EventTier::Masters),
        event("paris-indoor", "Paris Indoor", EventTier::Masters),
        event("queens", "Queen's Club", EventTier::Tour),
        event("barcelona", "Barcelona", EventTier::Tour),
        event("halle", "Halle", EventTier::Tour),
        event("doha", "Doha", EventTier::Tour),
        event("dubai", "Dubai", EventTier::Tour),
        // Doubles events carry the naming convention the pool builder
        // filters on and must never become attributes.
        event("wimbledon-doubles", "Wimbledon Doubles", EventTier::Tour),
        event("us-open-doubles", "US Open Doubles", EventTier::Tour),
    ];

    let entities = vec![
        player("p01", "R. Nadal", "ESP", (2001, 2024), true,
            &[("roland-garros", 2005), ("wimbledon", 2008), ("us-open", 2010),
              ("australian-open", 2009), ("monte-carlo", 2005), ("rome", 2005),
              ("madrid", 2010), ("barcelona", 2005)],
            1, &["olympic-gold", "career-slam", "davis-cup"]),
        player("p02", "C. Alcaraz", "ESP", (2018, 2025), false,
            &[("wimbledon", 2023), ("us-open", 2022), ("roland-garros", 2024),
              ("indian-wells", 2023), ("madrid", 2022)],
            1, &["youngest-no1"]),
        player("p03", "D. Ferrer", "ESP", (2000, 2019), false,
            &[("paris-indoor", 2012), ("barcelona", 2008)],
            3, &["davis-cup"]),
        player("p04", "C. Moya", "ESP", (1995, 2010), false,
            &[("roland-garros", 1998)],
            1, &["davis-cup"]),
        player("p05", "N. Djokovic", "SRB", (2003, 2025), false,
            &[("australian-open", 2008), ("wimbledon", 2011), ("us-open", 2011),
              ("roland-garros", 2016), ("indian-wells", 2008), ("miami", 2007),
              ("rome", 2008), ("canada", 2007), ("cincinnati", 2018),
              ("shanghai", 2012), ("paris-indoor", 2009), ("madrid", 2011),
              ("monte-carlo", 2013)],
            1, &["olympic-gold", "career-slam", "davis-cup", "golden-masters"]),
        player("p06", "J. Tipsarevic", "SRB", (2002, 2017), false,
            &[], 8, &["davis-cup"]),
        player("p07", "V. Troicki", "SRB", (2006, 2021), false,
            &[], 12, &["davis-cup"]),
        player("p08", "R. Federer", "SUI", (1998, 2022), false,
            &[("wimbledon", 2003), ("us-open", 2004), ("australian-open", 2004),
              ("roland-garros", 2009), ("indian-wells", 2004), ("miami", 2005),
              ("cincinnati", 2005), ("canada", 2004), ("shanghai", 2014),
              ("halle", 2003), ("dubai", 2004)],
            1, &["career-slam", "davis-cup"]),
        player("p09", "S. Wawrinka", "SUI", (2002, 2023), false,
            &[("australian-open", 2014), ("roland-garros", 2015),
              ("us-open", 2016), ("monte-carlo", 2014)],
            3, &["olympic-gold", "davis-cup"]),
        player("p10", "M. Rosset", "SUI", (1988, 2005), false,
            &[], 9, &["olympic-gold"]),
        player("p11", "P. Sampras", "USA", (1988, 2002), false,
            &[("wimbledon", 1993), ("us-open", 1990), ("australian-open", 1994),
              ("miami", 1993), ("cincinnati", 1992), ("paris-indoor", 1995)],
            1, &[]),
        player("p12", "A. Agassi", "USA", (1986, 2006), false,
            &[("wimbledon", 1992), ("us-open", 1994), ("australian-open", 1995),
              ("roland-garros", 1999), ("miami", 1990), ("canada", 1992),
              ("cincinnati", 1995), ("madrid", 2002)],
            1, &["olympic-gold", "career-slam", "davis-cup"]),
        player("p13", "J. McEnroe", "USA", (1978, 1992), true,
            &[("wimbledon", 1981), ("us-open", 1979), ("canada", 1984)],
            1, &["davis-cup"]),
        player("p14", "J. Connors", "USA", (1972, 1996), true,
            &[("wimbledon", 1974), ("us-open", 1974), ("australian-open", 1974)],
            1, &[]),
        player("p15", "A. Murray", "GBR", (2005, 2024), false,
            &[("wimbledon", 2013), ("us-open", 2012), ("canada", 2009),
              ("shanghai", 2010), ("queens", 2009), ("madrid", 2015)],
            1, &["olympic-gold", "davis-cup"]),
        player("p16", "T. Henman", "GBR", (1993, 2007), false,
            &[("paris-indoor", 2003), ("queens", 2001)],
            4, &[]),
        player("p17", "C. Norrie", "GBR", (2017, 2025), true,
            &[("indian-wells", 2021)],
            8, &[]),
        player("p18", "B. Becker", "GER", (1984, 1999), false,
            &[("wimbledon", 1985), ("us-open", 1989), ("australian-open", 1991),
              ("paris-indoor", 1986)],
            1, &["olympic-gold", "davis-cup"]),
        player("p19", "A. Zverev", "GER", (2013, 2025), false,
            &[("madrid", 2018), ("rome", 2017), ("cincinnati", 2021)],
            2, &["olympic-gold"]),
        player("p20", "T. Haas", "GER", (1996, 2017), false,
            &[], 2, &[]),
        player("p21", "G. Vilas", "ARG", (1969, 1992), true,
            &[("roland-garros", 1977), ("us-open", 1977), ("australian-open", 1977)],
            2, &[]),
        player("p22", "J. M. del Potro", "ARG", (2005, 2022), false,
            &[("us-open", 2009), ("indian-wells", 2018)],
            3, &["olympic-gold", "davis-cup"]),
        player("p23", "D. Schwartzman", "ARG", (2010, 2024), false,
            &[], 8, &[]),
        player("p24", "D. Medvedev", "RUS", (2014, 2025), false,
            &[("us-open", 2021), ("cincinnati", 2019), ("canada", 2021),
              ("shanghai", 2019), ("miami", 2023)],
            1, &[]),
        player("p25", "M. Safin", "RUS", (1997, 2009), false,
            &[("us-open", 2000), ("australian-open", 2005),
              ("paris-indoor", 2000), ("madrid", 2004)],
            1, &["davis-cup"]),
        player("p26", "Y. Kafelnikov", "RUS", (1992, 2003), false,
            &[("roland-garros", 1996), ("australian-open", 1999)],
            1, &["olympic-gold", "davis-cup"]),
        player("p27", "B. Borg", "SWE", (1973, 1984), false,
            &[("wimbledon", 1976), ("roland-garros", 1974), ("monte-carlo", 1977)],
            1, &[]),
        player("p28", "S. Edberg", "SWE", (1983, 1996), false,
            &[("wimbledon", 1988), ("us-open", 1991), ("australian-open", 1985),
              ("cincinnati", 1987), ("doha", 1995)],
            1, &["davis-cup"]),
        player("p29", "M. Wilander", "SWE", (1981, 1996), false,
            &[("roland-garros", 1982), ("australian-open", 1983), ("us-open", 1988)],
            1, &["davis-cup"]),
    ];

    InMemoryDataset::new(entities, catalog)
}
