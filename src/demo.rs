use crate::analyzer::Analyzer;

pub const DEMO_KEYWORD: &str = "best laptops 2024";

/// (domain, url, position, title, meta description, snippet)
const SAMPLE_COMPETITORS: [(&str, &str, i64, &str, &str, &str); 5] = [
    (
        "techradar.com",
        "https://www.techradar.com/best/laptops",
        1,
        "Best laptops 2024: Top picks for every need and budget",
        "Our experts have tested hundreds of laptops to find the best options for work, gaming, and creative tasks in 2024.",
        "Find the perfect laptop with our comprehensive guide to the best laptops of 2024...",
    ),
    (
        "pcmag.com",
        "https://www.pcmag.com/picks/the-best-laptops",
        2,
        "The Best Laptops for 2024 | PCMag",
        "Shopping for a laptop? We test and review hundreds of laptops each year to help you find the best laptop for your needs.",
        "Whether you need a laptop for work, school, or gaming, we have recommendations...",
    ),
    (
        "laptopmag.com",
        "https://www.laptopmag.com/articles/best-laptops",
        3,
        "Best Laptops 2024: Top Rated Laptops | Laptop Mag",
        "Looking for the best laptop? Our laptop buying guide features the top laptops we've tested, from budget to premium.",
        "Our laptop experts have tested and reviewed the latest laptops to help you choose...",
    ),
    (
        "tomsguide.com",
        "https://www.tomsguide.com/best-picks/best-laptops",
        4,
        "Best laptops in 2024: tested and reviewed | Tom's Guide",
        "We've tested the best laptops of 2024 to help you find the perfect portable computer for work, play and everything in between.",
        "The best laptops combine performance, portability, and value...",
    ),
    (
        "cnet.com",
        "https://www.cnet.com/tech/computing/best-laptop/",
        5,
        "Best Laptop of 2024 - CNET",
        "Find the best laptop for your needs with CNET's expert reviews and recommendations for 2024.",
        "CNET's laptop experts have tested and reviewed the latest models...",
    ),
];

pub fn populate(analyzer: &mut Analyzer) {
    for (domain, url, position, title, meta, snippet) in SAMPLE_COMPETITORS {
        analyzer.add_competitor(domain, url, position, title, meta, snippet);
    }
}

/// Analyzer for [`DEMO_KEYWORD`] holding five sample first-page results.
pub fn sample_analyzer() -> Analyzer {
    let mut analyzer = Analyzer::new(DEMO_KEYWORD);
    populate(&mut analyzer);
    analyzer
}
