//! Known-entity lookup tables.
//!
//! Loaded once at first use and read-only afterwards. All entries are
//! lowercase; matching is case-insensitive against ASCII-lowercased text.

use lazy_static::lazy_static;
use std::collections::HashSet;

fn set(entries: &[&'static str]) -> HashSet<&'static str> {
    entries.iter().copied().collect()
}

lazy_static! {
    /// Honorifics and office titles that precede a name.
    pub static ref TITLES: HashSet<&'static str> = set(&[
        "president", "vice president", "prime minister", "chancellor", "premier",
        "minister", "secretary", "senator", "representative", "congressman",
        "congresswoman", "governor", "mayor", "ambassador", "general", "admiral",
        "colonel", "captain", "commander", "chief", "director", "chairman",
        "chairwoman", "speaker", "justice", "judge", "attorney general", "pope",
        "king", "queen", "prince", "princess", "emperor", "sheikh", "sultan",
        "dr", "professor",
    ]);

    /// World leaders and other figures recognized without a title prefix.
    pub static ref KNOWN_PEOPLE: HashSet<&'static str> = set(&[
        "xi jinping", "vladimir putin", "volodymyr zelensky", "joe biden",
        "donald trump", "kamala harris", "emmanuel macron", "olaf scholz",
        "keir starmer", "narendra modi", "benjamin netanyahu", "kim jong un",
        "justin trudeau", "ursula von der leyen", "antonio guterres",
        "recep tayyip erdogan", "mohammed bin salman", "luiz inacio lula da silva",
        "pedro sanchez", "giorgia meloni", "fumio kishida", "anthony albanese",
        "cyril ramaphosa", "elon musk", "jerome powell", "christine lagarde",
    ]);

    pub static ref GOVERNMENT_TERMS: HashSet<&'static str> = set(&[
        "white house", "kremlin", "pentagon", "congress", "senate",
        "house of representatives", "parliament", "state department",
        "supreme court", "european union", "european commission",
        "european parliament", "security council", "state council", "politburo",
        "central military commission", "downing street", "treasury",
        "federal reserve", "justice department", "homeland security",
        "state duma", "national assembly", "house of commons", "house of lords",
        "foreign ministry", "defense ministry", "interior ministry",
        "central bank", "election commission",
    ]);

    pub static ref MILITARY_TERMS: HashSet<&'static str> = set(&[
        "army", "navy", "air force", "marine corps", "national guard",
        "coast guard", "people's liberation army", "royal navy", "royal air force",
        "revolutionary guard", "special forces", "joint chiefs of staff",
        "pacific fleet", "fifth fleet", "black sea fleet", "strategic command",
        "central command", "space force", "defense forces", "peacekeeping force",
    ]);

    pub static ref ORGANIZATIONS: HashSet<&'static str> = set(&[
        "united nations", "nato", "world health organization", "world bank",
        "international monetary fund", "world trade organization", "opec",
        "red cross", "red crescent", "amnesty international", "interpol",
        "unesco", "unicef", "fifa", "international olympic committee",
        "federal bureau of investigation", "central intelligence agency",
        "national security agency", "european central bank", "african union",
        "arab league", "asean", "google", "apple", "microsoft", "amazon",
        "meta", "tesla", "spacex", "boeing", "airbus", "openai", "pfizer",
        "moderna", "goldman sachs", "jpmorgan", "blackrock", "reuters",
        "associated press",
    ]);

    pub static ref COUNTRIES: HashSet<&'static str> = set(&[
        "afghanistan", "albania", "algeria", "argentina", "armenia", "australia",
        "austria", "azerbaijan", "bangladesh", "belarus", "belgium", "bolivia",
        "bosnia", "brazil", "bulgaria", "cambodia", "canada", "chile", "china",
        "colombia", "croatia", "cuba", "cyprus", "czech republic", "denmark",
        "ecuador", "egypt", "estonia", "ethiopia", "finland", "france",
        "georgia", "germany", "ghana", "greece", "haiti", "hungary", "iceland",
        "india", "indonesia", "iran", "iraq", "ireland", "israel", "italy",
        "japan", "jordan", "kazakhstan", "kenya", "kuwait", "latvia", "lebanon",
        "libya", "lithuania", "malaysia", "mexico", "moldova", "mongolia",
        "morocco", "myanmar", "nepal", "netherlands", "new zealand", "nicaragua",
        "nigeria", "north korea", "norway", "pakistan", "panama", "paraguay",
        "peru", "philippines", "poland", "portugal", "qatar", "romania",
        "russia", "rwanda", "saudi arabia", "serbia", "singapore", "slovakia",
        "slovenia", "somalia", "south africa", "south korea", "spain",
        "sri lanka", "sudan", "sweden", "switzerland", "syria", "taiwan",
        "thailand", "tunisia", "turkey", "uganda", "ukraine",
        "united arab emirates", "united kingdom", "united states", "uruguay",
        "uzbekistan", "venezuela", "vietnam", "yemen", "zimbabwe",
    ]);

    pub static ref PLACES: HashSet<&'static str> = set(&[
        "washington", "moscow", "beijing", "kyiv", "london", "paris", "berlin",
        "tokyo", "brussels", "geneva", "vienna", "new york", "los angeles",
        "chicago", "san francisco", "hong kong", "taipei", "jerusalem",
        "tel aviv", "gaza", "west bank", "tehran", "baghdad", "damascus",
        "kabul", "seoul", "pyongyang", "shanghai", "shenzhen", "istanbul",
        "ankara", "cairo", "riyadh", "dubai", "doha", "mumbai", "new delhi",
        "islamabad", "sydney", "melbourne", "toronto", "ottawa", "mexico city",
        "sao paulo", "buenos aires", "crimea", "donbas", "kharkiv", "odesa",
        "taiwan strait", "south china sea", "persian gulf", "red sea",
        "middle east", "silicon valley", "wall street", "capitol hill",
    ]);

    pub static ref EVENTS: HashSet<&'static str> = set(&[
        "world cup", "olympics", "olympic games", "winter olympics",
        "super bowl", "world series", "world war ii", "world war i",
        "cold war", "brexit", "g7 summit", "g20 summit", "nato summit",
        "world economic forum", "davos", "eurovision", "general assembly",
        "state of the union", "election day", "inauguration day",
        "climate summit", "paris agreement", "nuclear talks", "ceasefire talks",
        "peace talks", "trade talks",
    ]);

    /// Connector words allowed inside a capitalized phrase.
    pub static ref PHRASE_CONNECTORS: HashSet<&'static str> =
        set(&["of", "the", "and", "for", "de", "von", "van"]);

    /// Sentence-structure words never treated as a standalone entity.
    pub static ref SKIP_WORDS: HashSet<&'static str> = set(&[
        "the", "a", "an", "this", "that", "these", "those", "it", "its",
        "has", "have", "had", "been", "was", "were", "are", "is", "be",
        "said", "says", "told", "added", "noted", "asked", "called",
        "new", "many", "more", "most", "some", "all", "other", "such",
        "also", "just", "even", "still", "well", "back", "now", "then",
        "but", "and", "for", "not", "you", "his", "her", "their", "our",
        "first", "last", "next", "high", "low", "long", "short", "big",
        "according", "including", "during", "after", "before", "since",
        "while", "where", "when", "which", "what", "who", "how", "why",
        "continue", "reading", "here", "there", "very", "much", "far",
        "however", "although", "though", "because", "therefore", "thus",
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
        "sunday", "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ]);

    /// Suffix keywords that classify an unknown capitalized phrase.
    pub static ref GOVERNMENT_SUFFIXES: HashSet<&'static str> = set(&[
        "commission", "committee", "council", "ministry", "department",
        "bureau", "agency", "authority", "administration", "board", "command",
    ]);

    pub static ref MILITARY_SUFFIXES: HashSet<&'static str> = set(&[
        "army", "navy", "force", "forces", "guard", "corps", "fleet",
        "brigade", "division", "regiment", "battalion",
    ]);

    pub static ref ORGANIZATION_SUFFIXES: HashSet<&'static str> = set(&[
        "university", "college", "institute", "corporation", "company", "inc",
        "corp", "foundation", "association", "bank", "group", "trust", "fund",
        "union", "federation", "party",
    ]);
}
