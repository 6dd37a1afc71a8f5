/// Common given names used to split local parts that carry no separator,
/// e.g. `tonior` -> `tonio` + `r`.
///
/// Lookup walks this slice in order and stops at the first hit, so an entry
/// that is a prefix of another entry must come after it.
pub static KNOWN_FIRST_NAMES: &[&str] = &[
    "alexander", "alexandra", "alex", "andrew", "anna", "anthony", "antonio", "tonio",
    "benjamin", "brian", "carlos", "catherine", "charles", "chris", "daniel", "david",
    "diana", "edward", "elena", "elizabeth", "emily", "emma", "eric", "fatima",
    "francesca", "gabriel", "george", "grace", "hannah", "henry", "isabel", "jack",
    "james", "jane", "jason", "jennifer", "jessica", "john", "joseph", "jose",
    "julia", "karen", "kevin", "laura", "linda", "lisa", "lucas", "luis",
    "marco", "maria", "mark", "martin", "mary", "matthew", "michael", "michelle",
    "mohammed", "nancy", "nicholas", "nicole", "oliver", "olivia", "patricia", "paul",
    "peter", "priya", "rachel", "rebecca", "richard", "robert", "ryan", "samuel",
    "sandra", "sarah", "sophia", "stephen", "steven", "susan", "thomas", "timothy",
    "victoria", "william", "yuki", "zoe", "amir", "chen", "diego", "hiro",
    "lena", "omar",
];
