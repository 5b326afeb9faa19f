//! Compiled pattern tables for the number, date, verb, and people detectors,
//! and for the scoring-time feature counts.
//!
//! Patterns compile once at first use. The pattern sets are fixed; anything
//! user-tunable goes through `FilterKeyword` instead.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dictionaries::TITLES;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern must compile"))
        .collect()
}

pub static MONEY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\$[\d,]+(?:\.\d+)?(?:\s*(?:million|billion|trillion))?",
        r"(?i)\u{20ac}[\d,]+(?:\.\d+)?(?:\s*(?:million|billion|trillion))?",
        r"(?i)\u{a3}[\d,]+(?:\.\d+)?(?:\s*(?:million|billion|trillion))?",
        r"(?i)\b\d+(?:\.\d+)?\s*(?:dollars|euros|pounds|yen|yuan)\b",
    ])
});

pub static STATISTICS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b\d+(?:\.\d+)?%",
        r"(?i)\b\d+(?:\.\d+)?\s*(?:percent|percentage)\b",
        r"\b\d{1,3}(?:,\d{3})+\b",
        r"(?i)\b\d+(?:\.\d+)?\s*(?:million|billion|trillion|thousand)\b",
        r"(?i)\b\d+\s*(?:people|troops|soldiers|casualties|deaths|injured|killed|wounded)\b",
    ])
});

pub static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?",
        r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:,?\s+\d{4})?",
        r"\b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b",
        r"(?i)\b(?:last|next|this)\s+(?:week|month|year|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b",
    ])
});

/// Catch-all number classes. The plain-number pattern must stay last so the
/// more specific classes get the longer span.
pub static NUMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\b\d+(?:st|nd|rd|th)\b",
        r"(?i)\b\d{1,2}:\d{2}(?::\d{2})?\s*(?:AM|PM|a\.m\.|p\.m\.)?\b",
        r"\b\d+(?:\.\d+)?[-\u{2013}\u{2014}]\d+(?:\.\d+)?\b",
        r"\b\d+/\d+\b",
        r"\b\d{2,4}'?s\b",
        r"(?i)\b\d+(?:\.\d+)?\s*(?:km|mi|ft|in|cm|mm|kg|lb|lbs|oz|mg|mph|kph|hz|khz|mhz|ghz|kb|mb|gb|tb|kw|mw|gw)\b",
        r"\b\d+(?:\.\d+)?\s*[KkMmBb]\b",
        r"\bv?\d+(?:\.\d+)+\b",
        r"\b\d+(?:\.\d+)?[eE][+-]?\d+\b",
        r"[-\u{2212}]?\d+(?:\.\d+)?\u{b0}[FCfc]?\b",
        r"[+\u{2212}-]\d+(?:\.\d+)?%?\b",
        r"(?:No\.|#|\u{2116})\s*\d+\b",
        r"(?i)\b\d+[-\u{2013}](?:year|day|hour|minute|month|week|meter|mile|foot|pound|dollar|point|game|run|set)\b",
        r"[~\u{2248}<>\u{2264}\u{2265}]\s*\d+(?:\.\d+)?",
        r"\b\d+(?:\.\d+)?\b",
    ])
});

/// News action verbs, one alternation. Highlighted but never linked.
pub static VERB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    const VERBS: &[&str] = &[
        // communication
        "said", "says", "stated", "declared", "announced", "told", "claimed",
        "asserted", "remarked", "commented", "mentioned", "spoke", "responded",
        "replied", "answered", "questioned", "asked", "briefed", "addressed",
        "emphasized", "stressed", "highlighted", "reiterated", "clarified",
        "explained", "outlined", "described", "presented", "broadcast",
        "published", "posted", "tweeted", "shared", "reported", "disclosed",
        "revealed", "exposed", "leaked", "confirmed", "acknowledged",
        "admitted", "conceded", "noted", "cited", "quoted", "indicated",
        "suggested", "implied", "hinted", "speculated", "predicted",
        "forecast", "projected", "estimated", "wrote", "authored",
        // accusation
        "accused", "blamed", "alleged", "condemned", "denounced", "criticized",
        "slammed", "blasted", "lambasted", "rebuked", "faulted", "attacked",
        // support
        "praised", "commended", "applauded", "hailed", "celebrated",
        "endorsed", "supported", "backed", "championed", "advocated",
        "defended", "justified", "embraced", "touted",
        // agreement
        "agreed", "disagreed", "concurred", "disputed", "contested",
        "challenged", "opposed", "objected", "protested", "resisted",
        "rejected", "refused", "declined", "denied", "contradicted",
        "countered", "refuted", "dismissed", "doubted",
        // decision
        "decided", "determined", "concluded", "resolved", "ruled", "ordered",
        "commanded", "directed", "instructed", "mandated", "required",
        "demanded", "requested", "urged", "encouraged", "pressured",
        "lobbied", "petitioned", "appealed", "sought", "pursued", "planned",
        "proposed", "recommended", "forced", "compelled", "designated",
        // political
        "enacted", "legislated", "passed", "vetoed", "signed", "ratified",
        "amended", "repealed", "overturned", "enforced", "implemented",
        "governed", "regulated", "sanctioned", "authorized", "approved",
        "certified", "permitted", "banned", "prohibited", "blocked",
        "suspended", "revoked", "appointed", "nominated", "elected",
        "inaugurated", "impeached", "ousted", "toppled", "resigned",
        "retired", "quit",
        // military
        "struck", "bombed", "shelled", "fired", "shot", "targeted",
        "invaded", "occupied", "seized", "captured", "liberated", "retreated",
        "withdrew", "deployed", "mobilized", "escalated", "retaliated",
        "besieged", "blockaded", "ambushed", "raided", "stormed", "clashed",
        "fought", "battled", "killed", "murdered", "assassinated", "executed",
        "wounded", "injured", "died", "perished", "surrendered", "ceased",
        // legal
        "arrested", "detained", "jailed", "imprisoned", "released", "freed",
        "charged", "indicted", "prosecuted", "convicted", "acquitted",
        "sentenced", "fined", "pardoned", "exonerated", "testified", "sued",
        "settled", "extradited", "deported", "subpoenaed",
        // economic
        "invested", "acquired", "merged", "bought", "sold", "traded",
        "earned", "spent", "paid", "funded", "financed", "borrowed",
        "defaulted", "expanded", "grew", "shrank", "surged", "plunged",
        "soared", "plummeted", "rallied", "rose", "fell", "increased",
        "decreased", "doubled", "tripled", "halved", "slashed", "cut",
        "raised", "boosted", "lowered", "hired",
        // discovery
        "discovered", "found", "uncovered", "unearthed", "detected",
        "identified", "located", "traced", "tracked", "monitored",
        "surveyed", "examined", "analyzed", "investigated", "probed",
        "reviewed", "audited", "inspected", "verified", "tested",
        "recovered", "proved", "conducted",
        // change / creation
        "changed", "altered", "modified", "revised", "updated", "upgraded",
        "improved", "transformed", "shifted", "evolved", "adapted",
        "reformed", "overhauled", "replaced", "reversed", "created", "built",
        "constructed", "developed", "designed", "invented", "launched",
        "introduced", "unveiled", "opened", "established", "founded",
        "started", "began", "initiated", "closed", "ended", "terminated",
        "demolished", "destroyed", "damaged", "devastated", "collapsed",
        "exploded", "detonated", "burned", "flooded", "sank",
        // movement
        "moved", "traveled", "arrived", "departed", "returned", "visited",
        "toured", "fled", "escaped", "evacuated", "migrated", "expelled",
        "exiled", "crossed", "entered", "exited", "landed", "crashed",
        "collided", "derailed", "embarked",
        // emotion / prevention / competition / medical
        "feared", "worried", "alarmed", "shocked", "surprised", "stunned",
        "outraged", "angered", "pleased", "thrilled", "relieved", "mourned",
        "cheered", "welcomed", "prevented", "stopped", "halted", "thwarted",
        "foiled", "averted", "avoided", "protected", "secured", "saved",
        "rescued", "won", "lost", "defeated", "beat", "prevailed",
        "triumphed", "succeeded", "failed", "achieved", "completed",
        "finished", "led", "trailed", "tied", "qualified", "eliminated",
        "advanced", "competed", "diagnosed", "treated", "cured",
        "hospitalized", "vaccinated", "infected", "quarantined", "suffered",
    ];
    let alternation = VERBS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("static pattern must compile")
});

/// Capitalized word runs, allowing connectors: "Zhang Youxia",
/// "Central Military Commission", "Bank of England".
pub static CAP_SEQUENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[A-Z][a-z]+(?:[-'][a-z]+)?(?:\s+(?:(?:of|the|and|for|de|von|van)\s+)?[A-Z][a-z]+(?:[-'][a-z]+)?)*",
    )
    .expect("static pattern must compile")
});

/// Title word followed by a capitalized name, matched as one unit:
/// "President Xi Jinping", "general Zhang Youxia". The capture group holds
/// the bare name, which becomes the canonical form.
pub static TITLE_NAME: Lazy<Regex> = Lazy::new(|| {
    // Longest titles first so "prime minister" wins over "minister".
    let mut titles: Vec<&str> = TITLES.iter().copied().collect();
    titles.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let alternation = titles.join("|");
    Regex::new(&format!(
        r"\b(?i:{})\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
        alternation
    ))
    .expect("static pattern must compile")
});

// Feature patterns consumed by the objectivity scorer.

pub static ATTRIBUTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\bsaid\s+[A-Z]",
        r"(?i)\baccording to\b",
        r"(?i)\b(?:confirmed|announced|stated|reported)\s+by\b",
        r"(?i)\bofficials\s+(?:said|confirmed|announced)\b",
        r"(?i)\bspokesperson\s+said\b",
    ])
});

/// Quoted speech of at least ten characters.
pub static QUOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["\u{201c}][^"\u{201d}]{10,}["\u{201d}]"#).expect("static pattern must compile")
});

pub static FIGURE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\$[\d,]+(?:\.\d+)?(?:\s*(?:million|billion|trillion))?",
        r"\b\d+(?:\.\d+)?%",
        r"\b\d{1,3}(?:,\d{3})+\b",
    ])
});

pub static DATE_MENTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d",
        r"(?i)\blast\s+(?:week|month|year)\b",
        r"(?i)\b(?:yesterday|today|tomorrow)\b",
        r"(?i)\bsince\s+\d{4}\b",
    ])
});

pub const HEDGING_TERMS: &[&str] = &[
    "allegedly",
    "reportedly",
    "unconfirmed",
    "suspected",
    "appears to",
];
