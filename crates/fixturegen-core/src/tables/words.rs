//! Word and name lists for the text-shaped generators.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Emma", "Olivia", "Ava", "Isabella", "Sophia", "Mia", "Charlotte",
    "Amelia", "Harper", "Evelyn", "Liam", "Noah", "Oliver", "Elijah", "Benjamin",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

pub const EMAIL_HANDLES: &[&str] = &[
    "alex", "sam", "jordan", "taylor", "morgan", "riley", "jamie", "quinn", "casey", "dakota",
    "avery", "skyler", "dylan", "tanner",
];

pub const FREE_MAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"];

/// Domain used when only an extension is supplied.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "example";

pub const USERNAME_NAMES: &[&str] = &[
    "alex", "sam", "jordan", "taylor", "morgan", "riley", "jamie", "quinn", "casey", "dakota",
    "avery", "skyler", "dylan", "tanner", "emma", "olivia", "ava", "isabella", "sophia", "mia",
    "charlotte", "amelia", "harper", "evelyn", "liam", "noah", "oliver", "elijah", "james",
    "william", "benjamin",
];

pub const USERNAME_ADJECTIVES: &[&str] = &[
    "cool", "happy", "sunny", "lucky", "smart", "swift", "bright", "wild", "funny", "nice", "epic",
    "super", "mega", "ultra", "hyper", "active", "chill", "fresh", "big", "small", "fast", "slow",
    "young", "little", "great", "prime", "pro", "max", "ace",
];

pub const USERNAME_NOUNS: &[&str] = &[
    "cat", "dog", "wolf", "shark", "lion", "bear", "fox", "hawk", "eagle", "panda", "koala",
    "puppy", "kitten", "bunny", "duck", "bird", "fish", "unicorn", "dragon", "ninja", "coder",
    "geek", "hero", "star", "moon", "sun", "wave", "fire", "ice", "storm", "king", "queen",
    "prince", "lord", "lady",
];

pub const JOB_TITLES: &[&str] = &[
    "Junior Software Engineer",
    "Software Engineer",
    "Senior Software Engineer",
    "Staff Engineer",
    "Principal Engineer",
    "Full Stack Developer",
    "Junior Frontend Developer",
    "Frontend Developer",
    "Backend Developer",
    "Mobile Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Cloud Engineer",
    "Platform Engineer",
    "Data Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "MLOps Engineer",
    "Junior Data Scientist",
    "Data Scientist",
    "Senior Data Scientist",
    "Lead Data Scientist",
    "Cloud Architect",
    "Solutions Architect",
    "Enterprise Architect",
    "Engineering Manager",
    "Senior Engineering Manager",
    "Director of Engineering",
    "VP of Engineering",
    "CTO",
    "UI Designer",
    "UX Designer",
    "Product Designer",
    "Senior Product Designer",
    "Design Systems Lead",
    "Creative Director",
    "Art Director",
    "Product Manager",
    "Senior Product Manager",
    "Director of Product",
    "Product Owner",
    "Business Analyst",
    "Project Manager",
    "Program Manager",
    "Scrum Master",
    "Junior Data Analyst",
    "Data Analyst",
    "Senior Data Analyst",
    "Analytics Engineer",
    "Database Administrator",
    "System Administrator",
    "Network Engineer",
    "Security Engineer",
    "Security Analyst",
    "Penetration Tester",
    "QA Engineer",
    "QA Automation Engineer",
    "Lead QA Engineer",
    "SDET",
    "Technical Writer",
    "Senior Technical Writer",
    "Support Engineer",
    "Sales Engineer",
    "Technical Recruiter",
    "HR Manager",
    "Marketing Manager",
    "SEO Specialist",
    "Content Manager",
];

/// Seniority filters offered by the `job` type; `any` disables filtering.
pub const SENIORITY_LEVELS: &[&str] = &[
    "any",
    "junior",
    "senior",
    "lead",
    "staff",
    "principal",
    "manager",
    "director",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Tech", "Smart", "Global", "Digital", "Future", "Next", "Prime", "Alpha", "Beta", "Omega",
    "Ultra", "Mega", "Super", "Hyper", "Quantum", "Cloud", "Data", "Net", "Web", "App",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc",
    "Corp",
    "LLC",
    "Ltd",
    "Group",
    "Solutions",
    "Systems",
    "Tech",
    "Labs",
    "Ventures",
    "Holdings",
    "Enterprises",
    "Co",
    "Partners",
    "Associates",
];

pub const WORLD_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "San Francisco",
    "Indianapolis",
    "Seattle",
    "Denver",
    "Boston",
    "London",
    "Manchester",
    "Birmingham",
    "Edinburgh",
    "Glasgow",
    "Paris",
    "Lyon",
    "Marseille",
    "Berlin",
    "Munich",
    "Hamburg",
    "Tokyo",
    "Osaka",
    "Sydney",
    "Melbourne",
    "Toronto",
    "Vancouver",
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Shanghai",
    "Beijing",
    "Singapore",
    "Dubai",
    "Amsterdam",
    "Barcelona",
    "Milan",
    "Rome",
    "Lisbon",
    "Vienna",
    "Prague",
];

pub const TEXT_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "hello", "world", "test",
    "data", "generator", "sample", "text", "random", "useful", "helpful", "amazing", "awesome",
    "brilliant", "fantastic", "wonderful", "excellent", "perfect", "beautiful", "lovely", "nice",
    "good", "great",
];

pub const URL_DOMAINS: &[&str] = &[
    "google",
    "facebook",
    "amazon",
    "apple",
    "microsoft",
    "twitter",
    "linkedin",
    "github",
    "stackoverflow",
    "youtube",
    "netflix",
    "instagram",
    "pinterest",
    "reddit",
    "tumblr",
    "whatsapp",
    "telegram",
    "discord",
    "slack",
    "zoom",
];

pub const URL_TLDS: &[&str] = &[
    "com", "org", "net", "io", "co", "ai", "app", "dev", "tech", "info", "biz",
];

pub const URL_PATHS: &[&str] = &[
    "about", "products", "services", "blog", "contact", "pricing", "docs", "help", "support",
    "news", "careers",
];

/// Cosmetic messages attached to successful results.
pub const RESULT_MESSAGES: &[&str] = &[
    "✨ Poof! All done!",
    "🎉 Boom! Data incoming!",
    "🚀 Ready for liftoff!",
    "🎯 Bullseye!",
    "🪄 Magic happens here!",
    "⚡ ZAP! Done!",
    "🔥 Hot fresh data!",
    "🌟 Shining bright!",
    "💥 Pow!",
    "🎊 Party time!",
];
