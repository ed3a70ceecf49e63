// Unit tests for Job Match

use chrono::{NaiveDate, TimeZone, Utc};
use job_match::core::{filters::matches_at, scoring::calculate_match_score};
use job_match::models::{
    CandidateProfile, ExperienceEntry, FilterCriteria, JobLevel, JobPosting, JobStatus,
    PostedWithin, Salary, SalaryBand, ScoringWeights, WorkType,
};

const LEVELS: &[&str] = &["Intern", "Fresher", "Junior", "Middle", "Senior", "Lead", "Manager", "Staff"];
const SKILLS: &[&str] = &["React", "node", "Docker", "rust", "SQL", "reactive", "Go", ""];
const PLACES: &[&str] = &["Hanoi", "Ha Noi", "TP.HCM", "Quận 1, TP.HCM", "Đà Nẵng", ""];
const CATEGORIES: &[&str] = &["it-software", "marketing", "data"];
const COMPANY_SIZES: &[&str] = &["1-99", "100-499", "1000+"];
const TITLES: &[&str] = &["Backend Developer", "Senior Backend Engineer", "Designer", "  ", ""];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn candidate(skills: &[&str], years: &[u32], address: &str, title: &str) -> CandidateProfile {
    CandidateProfile {
        skills: strings(skills),
        experience_entries: years
            .iter()
            .map(|&y| ExperienceEntry { duration_years: y, ..Default::default() })
            .collect(),
        address: address.to_string(),
        desired_title: title.to_string(),
    }
}

fn job(skills: &[&str], level: &str, location: &str, title: &str) -> JobPosting {
    JobPosting {
        id: "job".to_string(),
        title: title.to_string(),
        description: "Maintain the hiring platform".to_string(),
        employer_name: "Acme Vietnam".to_string(),
        skills: strings(skills),
        level: JobLevel::from(level),
        location: location.to_string(),
        category: "it-software".to_string(),
        work_type: WorkType::FullTime,
        company_size: "100-499".to_string(),
        salary: Salary { min: 15_000_000, max: 18_000_000, negotiable: false },
        benefits: strings(&["Bonus", "Insurance"]),
        posted_date: Some(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()),
        status: JobStatus::Active,
    }
}

/// Small deterministic generator so the sweep is reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.next(items.len())]
    }

    fn pick_many<'a>(&mut self, items: &[&'a str]) -> Vec<&'a str> {
        let count = self.next(4);
        (0..count).map(|_| self.pick(items)).collect()
    }
}

#[test]
fn test_reference_scenario_scores_72() {
    let candidate = candidate(&["React", "Node"], &[4], "Hanoi", "Backend Developer");
    let job = job(&["react", "node", "docker"], "Middle", "Ha Noi", "Senior Backend Engineer");

    let breakdown = calculate_match_score(&candidate, &job, &ScoringWeights::default());

    assert_eq!(breakdown.location, 0.0, "'hanoi' and 'ha noi' do not contain each other");
    assert_eq!(breakdown.total, 72);
}

#[test]
fn test_empty_skills_contribute_nothing() {
    let weights = ScoringWeights::default();

    let no_candidate_skills = candidate(&[], &[3], "Hanoi", "Developer");
    let breakdown = calculate_match_score(&no_candidate_skills, &job(&["rust"], "Middle", "", ""), &weights);
    assert_eq!(breakdown.skills, 0.0);

    let has_skills = candidate(&["rust"], &[3], "Hanoi", "Developer");
    let breakdown = calculate_match_score(&has_skills, &job(&[], "Middle", "", ""), &weights);
    assert_eq!(breakdown.skills, 0.0);
}

#[test]
fn test_fully_covered_skills_contribute_forty() {
    let weights = ScoringWeights::default();
    let candidate = candidate(&["ReactJS", "Node.js", "Docker Compose"], &[], "", "");

    for skills in [&["react"][..], &["react", "node"][..], &["REACT", "NODE", "docker"][..]] {
        let breakdown = calculate_match_score(&candidate, &job(skills, "Middle", "", ""), &weights);
        assert_eq!(breakdown.skills, 40.0, "skills {:?}", skills);
    }
}

#[test]
fn test_manager_with_eight_or_more_years_gets_full_experience() {
    let weights = ScoringWeights::default();

    for years in 8..40 {
        let candidate = candidate(&[], &[years], "", "");
        let breakdown = calculate_match_score(&candidate, &job(&[], "Manager", "", ""), &weights);
        assert_eq!(breakdown.experience, 30.0, "{} years", years);
    }

    // Overlapping roles add up: 5 + 3 = 8
    let candidate = candidate(&[], &[5, 3], "", "");
    let breakdown = calculate_match_score(&candidate, &job(&[], "Manager", "", ""), &weights);
    assert_eq!(breakdown.experience, 30.0);
}

#[test]
fn test_score_always_within_bounds() {
    let weights = ScoringWeights::default();
    let mut rng = Lcg(42);

    for _ in 0..2_000 {
        let years: Vec<u32> = (0..rng.next(4)).map(|_| rng.next(15) as u32).collect();
        let candidate = candidate(&rng.pick_many(SKILLS), &years, rng.pick(PLACES), rng.pick(TITLES));
        let job = job(&rng.pick_many(SKILLS), rng.pick(LEVELS), rng.pick(PLACES), rng.pick(TITLES));

        let breakdown = calculate_match_score(&candidate, &job, &weights);
        assert!(breakdown.total <= 100, "score {} out of range", breakdown.total);

        let sum = breakdown.skills + breakdown.experience + breakdown.location + breakdown.title;
        assert_eq!(breakdown.total, sum.min(100.0).round() as u8);
    }
}

#[test]
fn test_location_and_salary_filter_scenario() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let criteria = FilterCriteria {
        location: Some("TP.HCM".to_string()),
        salary_range: Some(SalaryBand::From10To20),
        ..Default::default()
    };

    let mut posting = job(&[], "Middle", "TP.HCM", "Engineer");
    assert!(matches_at(&posting, &criteria, now));

    posting.location = "Hà Nội".to_string();
    assert!(!matches_at(&posting, &criteria, now));
}

#[test]
fn test_adding_constraints_never_widens_results() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    let mut rng = Lcg(7);

    let jobs: Vec<JobPosting> = (0..200)
        .map(|i| {
            let mut j = job(&rng.pick_many(SKILLS), rng.pick(LEVELS), rng.pick(PLACES), rng.pick(TITLES));
            j.id = i.to_string();
            j.salary = Salary {
                min: rng.next(40) as u64 * 1_000_000,
                max: rng.next(60) as u64 * 1_000_000,
                negotiable: rng.next(5) == 0,
            };
            j.posted_date = match rng.next(8) {
                0 => None,
                d => Some(NaiveDate::from_ymd_opt(2024, 3, 1 + d as u32).unwrap()),
            };
            j.category = rng.pick(CATEGORIES).to_string();
            j.company_size = rng.pick(COMPANY_SIZES).to_string();
            if rng.next(2) == 0 {
                j.benefits.pop();
            }
            j
        })
        .collect();

    // Each step keeps the previous constraints and adds one more
    let steps: Vec<Box<dyn Fn(&mut FilterCriteria)>> = vec![
        Box::new(|c: &mut FilterCriteria| c.keyword = Some("platform".to_string())),
        Box::new(|c: &mut FilterCriteria| c.posted_within = Some(PostedWithin::Week)),
        Box::new(|c: &mut FilterCriteria| c.salary_range = Some(SalaryBand::From10To20)),
        Box::new(|c: &mut FilterCriteria| c.benefits_all = vec!["Insurance".to_string()]),
        Box::new(|c: &mut FilterCriteria| c.skills_any = vec!["rust".to_string(), "React".to_string()]),
        Box::new(|c: &mut FilterCriteria| c.category = Some("it-software".to_string())),
        Box::new(|c: &mut FilterCriteria| c.company_size = Some("100-499".to_string())),
        Box::new(|c: &mut FilterCriteria| c.level = Some("Senior".to_string())),
        Box::new(|c: &mut FilterCriteria| c.location = Some("TP.HCM".to_string())),
    ];

    let mut criteria = FilterCriteria::default();
    let mut previous: Vec<&str> = jobs
        .iter()
        .filter(|j| matches_at(j, &criteria, now))
        .map(|j| j.id.as_str())
        .collect();
    assert_eq!(previous.len(), jobs.len());

    for step in steps {
        step(&mut criteria);
        let current: Vec<&str> = jobs
            .iter()
            .filter(|j| matches_at(j, &criteria, now))
            .map(|j| j.id.as_str())
            .collect();

        assert!(current.iter().all(|id| previous.contains(id)), "criteria {:?} widened the results", criteria);
        previous = current;
    }
}
