//! English word lists used by the rule-based tagger and entity recognizer

use std::collections::{HashMap, HashSet};

use super::Pos;

lazy_static::lazy_static! {
    pub static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
            "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
            "amongst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything",
            "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became", "because",
            "become", "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
            "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by", "ca",
            "call", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down", "due",
            "during", "each", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough",
            "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
            "fifteen", "fifty", "first", "five", "for", "former", "formerly", "forty", "four",
            "from", "front", "full", "further", "get", "give", "go", "had", "has", "have", "he",
            "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon", "hers", "herself",
            "him", "himself", "his", "how", "however", "hundred", "i", "if", "in", "indeed", "into",
            "is", "it", "its", "itself", "just", "keep", "last", "latter", "latterly", "least",
            "less", "made", "make", "many", "may", "me", "meanwhile", "might", "mine", "more",
            "moreover", "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely",
            "neither", "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
            "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
            "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
            "over", "own", "part", "per", "perhaps", "please", "put", "quite", "rather", "re",
            "really", "regarding", "same", "say", "see", "seem", "seemed", "seeming", "seems",
            "serious", "several", "she", "should", "show", "side", "since", "six", "sixty", "so",
            "some", "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
            "still", "such", "take", "ten", "than", "that", "the", "their", "them", "themselves",
            "then", "thence", "there", "thereafter", "thereby", "therefore", "therein",
            "thereupon", "these", "they", "third", "this", "those", "though", "three", "through",
            "throughout", "thru", "thus", "to", "together", "too", "top", "toward", "towards",
            "twelve", "twenty", "two", "under", "unless", "until", "up", "upon", "us", "used",
            "using", "various", "very", "via", "was", "we", "well", "were", "what", "whatever",
            "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
            "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
            "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet",
            "you", "your", "yours", "yourself", "yourselves",
            "'s", "'re", "'ve", "'ll", "'d", "'m", "n't", "don't", "doesn't", "didn't", "won't",
            "can't", "isn't", "aren't", "wasn't", "weren't", "i'm", "it's", "we're", "they're",
            "you're", "i've", "we've", "let's",
        ];
        words.iter().copied().collect()
    };

    /// Closed-class words with a fixed part of speech
    pub static ref CLOSED_CLASS: HashMap<&'static str, Pos> = {
        let mut map = HashMap::new();
        for w in [
            "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
            "no", "another", "either", "neither", "all", "both", "such",
        ] {
            map.insert(w, Pos::Determiner);
        }
        for w in [
            "i", "me", "you", "he", "she", "it", "we", "they", "them", "us", "him", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves", "someone",
            "everyone", "anyone", "something", "anything", "nothing", "everything", "who", "whom",
            "what", "which", "whose",
        ] {
            map.insert(w, Pos::Pronoun);
        }
        for w in POSSESSIVES.iter() {
            map.insert(*w, Pos::Pronoun);
        }
        for w in [
            "in", "on", "at", "to", "of", "for", "with", "by", "from", "about", "into", "onto",
            "over", "under", "between", "through", "during", "before", "after", "across",
            "against", "among", "around", "without", "within", "upon", "near", "behind",
            "beyond", "via", "per", "toward", "towards", "since", "until", "like", "throughout",
            "inside", "outside", "above", "below",
        ] {
            map.insert(w, Pos::Adposition);
        }
        for w in [
            "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
            "if", "unless", "whereas", "whether", "than", "&",
        ] {
            map.insert(w, Pos::Conjunction);
        }
        for w in [
            "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
            "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
            "could", "'m", "'re", "'ve", "'ll", "'d",
        ] {
            map.insert(w, Pos::Auxiliary);
        }
        for w in [
            "very", "really", "just", "only", "also", "too", "even", "still", "already", "now",
            "then", "here", "there", "always", "never", "often", "sometimes", "soon", "again",
            "quite", "rather", "almost", "however", "well", "how", "when", "where", "why",
            "together", "ever",
        ] {
            map.insert(w, Pos::Adverb);
        }
        for w in ["not", "n't", "'s", "up", "down", "out", "off", "away", "back"] {
            map.insert(w, Pos::Particle);
        }
        for w in [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "sixty", "hundred",
            "thousand", "million", "billion",
        ] {
            map.insert(w, Pos::Numeral);
        }
        map
    };

    pub static ref POSSESSIVES: HashSet<&'static str> =
        ["my", "your", "his", "her", "its", "our", "their"].into_iter().collect();

    pub static ref SUBJECT_PRONOUNS: HashSet<&'static str> =
        ["i", "you", "he", "she", "it", "we", "they"].into_iter().collect();

    pub static ref MODALS: HashSet<&'static str> = [
        "will", "would", "shall", "should", "may", "might", "must", "can", "could", "'ll", "'d",
    ]
    .into_iter()
    .collect();

    pub static ref ADJECTIVES: HashSet<&'static str> = [
        "new", "old", "good", "great", "big", "small", "large", "little", "high", "low", "long",
        "short", "young", "early", "late", "important", "different", "best", "better", "major",
        "key", "main", "real", "free", "open", "hard", "easy", "strong", "local", "global",
        "public", "private", "social", "digital", "excited", "happy", "glad", "proud", "ready",
        "available", "latest", "recent", "quick", "fast", "simple", "clear", "huge", "amazing",
        "awesome", "exciting", "innovative", "successful", "annual", "international",
        "national", "upcoming", "busy", "whole", "bad", "true", "false", "final", "current",
        "certain", "special", "fresh", "smart", "modern", "remote", "hybrid", "senior",
        "junior", "friendly", "thrilled", "delighted", "grateful", "thankful",
    ]
    .into_iter()
    .collect();

    /// Base forms of common verbs; inflected forms are matched after de-inflection
    pub static ref VERB_BASES: HashSet<&'static str> = [
        "announce", "get", "go", "see", "know", "think", "come", "want", "use", "find", "give",
        "tell", "work", "try", "ask", "need", "feel", "become", "leave", "mean", "let", "begin",
        "seem", "help", "hear", "play", "like", "live", "believe", "bring", "happen", "write",
        "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue", "learn",
        "understand", "watch", "follow", "stop", "create", "speak", "read", "allow", "add",
        "spend", "grow", "walk", "win", "offer", "remember", "love", "consider", "appear", "buy",
        "wait", "serve", "send", "expect", "build", "stay", "reach", "remain", "join", "share",
        "thank", "hope", "invite", "celebrate", "discuss", "introduce", "say", "make", "take",
        "look", "keep", "explore", "improve", "reply", "respond", "schedule", "check", "apologize",
        "confirm", "attend", "welcome", "unveil", "reveal", "host", "receive", "deliver",
    ]
    .into_iter()
    .collect();

    pub static ref IRREGULAR_VERBS: HashMap<&'static str, &'static str> = [
        ("said", "say"), ("says", "say"), ("made", "make"), ("went", "go"), ("gone", "go"),
        ("took", "take"), ("taken", "take"), ("came", "come"), ("saw", "see"), ("seen", "see"),
        ("knew", "know"), ("known", "know"), ("thought", "think"), ("gave", "give"),
        ("given", "give"), ("told", "tell"), ("found", "find"), ("felt", "feel"),
        ("left", "leave"), ("brought", "bring"), ("wrote", "write"), ("written", "write"),
        ("met", "meet"), ("built", "build"), ("sent", "send"), ("won", "win"), ("bought", "buy"),
        ("got", "get"), ("began", "begin"), ("begun", "begin"), ("became", "become"),
        ("kept", "keep"), ("lost", "lose"), ("paid", "pay"), ("spoke", "speak"),
        ("spoken", "speak"), ("grew", "grow"), ("grown", "grow"), ("stood", "stand"),
    ]
    .into_iter()
    .collect();

    pub static ref IRREGULAR_NOUNS: HashMap<&'static str, &'static str> = [
        ("people", "person"), ("children", "child"), ("men", "man"), ("women", "woman"),
        ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
        ("data", "data"), ("media", "media"), ("criteria", "criterion"),
        ("analyses", "analysis"), ("indices", "index"), ("leaves", "leaf"), ("lives", "life"),
        ("wives", "wife"), ("knives", "knife"),
    ]
    .into_iter()
    .collect();

    /// Words ending in -s that are already singular
    pub static ref SINGULAR_S: HashSet<&'static str> = [
        "news", "series", "species", "bus", "gas", "lens", "business", "process", "access",
        "address", "success", "status", "campus", "bonus", "focus", "virus", "analysis",
        "basis", "crisis", "thesis", "physics", "economics", "mathematics", "politics",
        "always", "perhaps", "is", "was", "has", "does", "this", "us", "yes", "canvas", "alias",
    ]
    .into_iter()
    .collect();

    /// Words with a matching suffix that do not take the suffix's part of speech
    pub static ref SUFFIX_EXCEPTIONS: HashSet<&'static str> = [
        "family", "supply", "apply", "reply", "rely", "ally", "fly", "july", "italy", "assembly",
        "anomaly", "monopoly", "butterfly", "bully", "belly", "jelly", "rally", "holly",
        "music", "logic", "topic", "traffic", "clinic", "magic", "panic", "republic",
        "mechanic", "fabric", "graphic", "epic", "critic", "tactic", "picnic", "arsenic",
        "executive", "objective", "initiative", "archive", "motive", "detective", "directive",
        "representative", "alternative", "perspective", "incentive", "narrative",
        "vegetable", "table", "cable", "label", "timetable", "variable", "deliverable",
        "bible", "mission", "thing", "king", "ring", "string", "spring", "wing", "morning",
        "evening", "ceiling", "meeting", "building", "wedding", "feeling",
        "opening", "training", "marketing", "networking", "engineering", "funding", "pricing",
        "hosting", "shipping", "onboarding", "hiring", "learning",
        "bed", "red", "need", "seed", "speed", "feed", "shed", "bread", "thread", "hundred",
        "sled", "shred",
    ]
    .into_iter()
    .collect();

    pub static ref HONORIFICS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "dame", "president",
        "ceo", "cto", "cfo", "senator", "governor", "mayor", "minister", "judge", "captain",
        "general", "rev", "saint",
    ]
    .into_iter()
    .collect();

    /// Abbreviations whose trailing period does not end a sentence
    pub static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "ltd", "co", "corp", "vs",
        "etc", "e.g", "i.e", "no", "mt", "ft", "gen", "rev", "sen", "gov",
    ]
    .into_iter()
    .collect();

    pub static ref ORG_SUFFIXES: HashSet<&'static str> = [
        "inc", "corp", "corporation", "ltd", "llc", "co", "company", "group", "university",
        "institute", "foundation", "association", "bank", "agency", "department", "ministry",
        "council", "committee", "labs", "lab", "technologies", "systems", "partners",
        "holdings", "college", "school", "society", "club", "team", "union", "network",
        "studios", "ventures", "capital",
    ]
    .into_iter()
    .collect();

    pub static ref LAW_WORDS: HashSet<&'static str> = [
        "act", "law", "amendment", "treaty", "bill", "regulation", "constitution", "directive",
        "statute", "code", "accord",
    ]
    .into_iter()
    .collect();

    pub static ref EVENT_WORDS: HashSet<&'static str> = [
        "conference", "summit", "festival", "championship", "cup", "olympics", "expo", "war",
        "games", "week", "awards", "hackathon", "forum", "meetup", "fair", "convention",
        "marathon", "tournament", "series", "symposium", "day",
    ]
    .into_iter()
    .collect();

    pub static ref LOCATION_SUFFIXES: HashSet<&'static str> = [
        "city", "county", "state", "states", "river", "mountain", "mountains", "island",
        "islands", "street", "avenue", "park", "valley", "bay", "lake", "ocean", "sea",
        "province", "kingdom", "coast", "beach", "harbor", "district", "region", "heights",
        "square", "road",
    ]
    .into_iter()
    .collect();

    pub static ref LOCATION_PREPOSITIONS: HashSet<&'static str> = [
        "in", "at", "from", "near", "across", "throughout", "around", "outside", "inside",
        "to", "into", "visiting", "visit",
    ]
    .into_iter()
    .collect();

    pub static ref PRODUCT_SUFFIXES: HashSet<&'static str> = [
        "pro", "max", "mini", "plus", "ultra", "edition", "os", "air", "beta", "lite",
    ]
    .into_iter()
    .collect();

    pub static ref MONTHS: HashSet<&'static str> = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect();

    pub static ref WEEKDAYS: HashSet<&'static str> = [
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
        "today", "tomorrow", "yesterday",
    ]
    .into_iter()
    .collect();

    /// Well-known places, matched on the whole lower-cased name
    pub static ref KNOWN_LOCATIONS: HashSet<&'static str> = [
        "africa", "america", "amsterdam", "asia", "athens", "atlanta", "australia", "austin",
        "bangkok", "barcelona", "beijing", "berlin", "boston", "brazil", "brussels", "california",
        "canada", "chicago", "china", "denver", "dubai", "dublin", "egypt", "england", "europe",
        "france", "germany", "greece", "hong kong", "india", "ireland", "israel", "istanbul",
        "italy", "japan", "kenya", "korea", "lisbon", "london", "los angeles", "madrid",
        "mexico", "miami", "milan", "moscow", "mumbai", "munich", "new delhi", "new jersey",
        "new york", "new zealand", "nigeria", "norway", "paris", "portugal", "rome", "russia",
        "san diego", "san francisco", "san jose", "seattle", "seoul", "shanghai", "singapore",
        "south korea", "spain", "stockholm", "sweden", "switzerland", "sydney", "taiwan",
        "texas", "tokyo", "toronto", "uk", "ukraine", "united kingdom", "united states", "usa",
        "vancouver", "vienna", "washington", "zurich",
    ]
    .into_iter()
    .collect();

    /// Well-known organizations, matched on the whole lower-cased name
    pub static ref KNOWN_ORGANIZATIONS: HashSet<&'static str> = [
        "adobe", "airbnb", "amazon", "anthropic", "facebook", "github", "google", "ibm", "intel",
        "linkedin", "meta", "microsoft", "mozilla", "netflix", "nvidia", "openai", "oracle",
        "salesforce", "samsung", "slack", "spotify", "stripe", "tesla", "twitter", "uber",
        "youtube",
    ]
    .into_iter()
    .collect();

    /// Common given names; a proper-noun run starting with one is a person
    pub static ref FIRST_NAMES: HashSet<&'static str> = [
        "alice", "andrew", "anna", "barack", "ben", "bob", "carlos", "charles", "chris",
        "daniel", "david", "elizabeth", "elon", "emily", "emma", "george", "hillary", "james",
        "jane", "jennifer", "jessica", "john", "joe", "joseph", "kamala", "karen", "laura",
        "linda", "maria", "mary", "michael", "michelle", "mohammed", "nancy", "olivia", "paul",
        "peter", "richard", "robert", "sarah", "satya", "steve", "susan", "thomas", "tim",
        "william",
    ]
    .into_iter()
    .collect();

    /// Connectors allowed inside a multi-word proper name ("Bank of America")
    pub static ref NAME_CONNECTORS: HashSet<&'static str> =
        ["of", "the", "&", "de", "du", "van", "von", "da", "del", "la"].into_iter().collect();
}

pub fn is_stopword(lower: &str) -> bool {
    STOPWORDS.contains(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords() {
        assert!(is_stopword("the"));
        assert!(is_stopword("our"));
        assert!(!is_stopword("product"));
        assert!(!is_stopword("new"));
    }

    #[test]
    fn test_closed_class() {
        assert_eq!(CLOSED_CLASS.get("the"), Some(&Pos::Determiner));
        assert_eq!(CLOSED_CLASS.get("our"), Some(&Pos::Pronoun));
        assert_eq!(CLOSED_CLASS.get("in"), Some(&Pos::Adposition));
        assert_eq!(CLOSED_CLASS.get("product"), None);
    }
}
