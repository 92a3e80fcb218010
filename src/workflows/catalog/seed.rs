use chrono::NaiveDate;

use super::domain::{
    CourseLevel, CutoffEntry, Difficulty, ExamCategory, ExamLevel, ExamRecord, NaacGrade, Region,
    ReservationCategory, Scholarship, ScholarshipEligibility, UniversityKind, UniversityRecord,
};

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn cutoffs(entries: &[(i32, u32)]) -> Vec<CutoffEntry> {
    entries
        .iter()
        .map(|&(year, rank)| CutoffEntry { year, rank })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn standard_exams() -> Vec<ExamRecord> {
    use Difficulty::{Easy, Hard, Medium};
    use ExamCategory::{Design, Global, Government, Management, PrivateEngineering, SkillBased};
    use ExamLevel::{International, National, State, University};

    vec![
        ExamRecord::new(
            "ts-eamcet",
            "TS EAMCET",
            Government,
            State,
            Medium,
            list(&["B.Tech", "B.Pharm", "B.Sc Agriculture"]),
            list(&[
                "JNTU Hyderabad",
                "Osmania University, Hyderabad",
                "Kakatiya University, Warangal",
            ]),
        ),
        ExamRecord::new(
            "ap-eapcet",
            "AP EAPCET",
            Government,
            State,
            Medium,
            list(&["B.Tech", "B.Pharm", "B.Sc Agriculture"]),
            list(&[
                "Andhra University, Visakhapatnam",
                "JNTU Kakinada",
                "Sri Venkateswara University, Tirupati",
            ]),
        ),
        ExamRecord::new(
            "jee-main",
            "JEE Main",
            Government,
            National,
            Hard,
            list(&["B.Tech", "B.E", "B.Arch"]),
            list(&["NIT Warangal", "IIIT Hyderabad", "NIT Andhra Pradesh"]),
        ),
        ExamRecord::new(
            "jee-advanced",
            "JEE Advanced",
            Government,
            National,
            Hard,
            list(&["B.Tech", "Dual Degree B.Tech + M.Tech"]),
            list(&["IIT Hyderabad", "IIT Tirupati"]),
        ),
        ExamRecord::new(
            "bitsat",
            "BITSAT",
            PrivateEngineering,
            National,
            Hard,
            list(&["B.E", "Integrated M.Sc"]),
            list(&["BITS Pilani, Hyderabad Campus"]),
        ),
        ExamRecord::new(
            "viteee",
            "VITEEE",
            PrivateEngineering,
            University,
            Medium,
            list(&["B.Tech"]),
            list(&["VIT-AP University, Amaravati"]),
        ),
        ExamRecord::new(
            "srmjeee",
            "SRMJEEE",
            PrivateEngineering,
            University,
            Easy,
            list(&["B.Tech"]),
            list(&["SRM University AP, Amaravati"]),
        ),
        ExamRecord::new(
            "gitam-gat",
            "GITAM GAT",
            PrivateEngineering,
            University,
            Easy,
            list(&["B.Tech", "B.Arch"]),
            list(&["GITAM, Visakhapatnam", "GITAM, Hyderabad"]),
        ),
        ExamRecord::new(
            "ts-polycet",
            "TS POLYCET",
            SkillBased,
            State,
            Easy,
            list(&["Diploma in Engineering", "Diploma in Agriculture"]),
            list(&["Government Polytechnic, Hyderabad"]),
        ),
        ExamRecord::new(
            "neet-ug",
            "NEET UG",
            Government,
            National,
            Hard,
            list(&["MBBS", "BDS", "B.Sc Nursing"]),
            list(&["Osmania Medical College", "Gandhi Medical College"]),
        ),
        ExamRecord::new(
            "ts-icet",
            "TS ICET",
            Management,
            State,
            Medium,
            list(&["MBA", "MCA"]),
            list(&["Osmania University, Hyderabad"]),
        ),
        ExamRecord::new(
            "ap-icet",
            "AP ICET",
            Management,
            State,
            Easy,
            list(&["MBA", "MCA"]),
            list(&["Andhra University, Visakhapatnam"]),
        ),
        ExamRecord::new(
            "cat",
            "CAT",
            Management,
            National,
            Hard,
            list(&["MBA", "PGDM"]),
            list(&["IIM Visakhapatnam", "IIM Bangalore"]),
        ),
        ExamRecord::new(
            "uceed",
            "UCEED",
            Design,
            National,
            Medium,
            list(&["B.Des"]),
            list(&["IIT Hyderabad", "IIT Bombay"]),
        ),
        ExamRecord::new(
            "nid-dat",
            "NID DAT",
            Design,
            National,
            Hard,
            list(&["B.Des", "M.Des"]),
            list(&["NID Andhra Pradesh", "NID Ahmedabad"]),
        ),
        ExamRecord::new(
            "sat",
            "SAT",
            Global,
            International,
            Medium,
            list(&["Undergraduate Abroad"]),
            list(&["US Universities"]),
        ),
        ExamRecord::new(
            "ielts",
            "IELTS Academic",
            Global,
            International,
            Easy,
            list(&["Study Abroad Admissions"]),
            list(&["UK, Canada and Australia Universities"]),
        ),
    ]
}

pub(crate) fn standard_universities() -> Vec<UniversityRecord> {
    use NaacGrade::{APlus, APlusPlus, A};
    use Region::{AndhraPradesh, Telangana};
    use UniversityKind::{Autonomous, Deemed, Government, Private};

    vec![
        UniversityRecord::new(
            "osmania-university",
            "Osmania University",
            Telangana,
            Government,
            APlus,
            cutoffs(&[(2024, 3500), (2023, 3800)]),
            "₹35,000 per year",
        ),
        UniversityRecord::new(
            "jntu-hyderabad",
            "JNTU Hyderabad College of Engineering",
            Telangana,
            Government,
            APlus,
            cutoffs(&[(2023, 2500), (2024, 2200)]),
            "₹40,000 per year",
        ),
        UniversityRecord::new(
            "cbit-hyderabad",
            "Chaitanya Bharathi Institute of Technology",
            Telangana,
            Autonomous,
            APlusPlus,
            cutoffs(&[(2024, 4000), (2023, 4300)]),
            "₹1,40,000 per year",
        ),
        UniversityRecord::new(
            "vnr-vjiet",
            "VNR Vignana Jyothi Institute of Engineering and Technology",
            Telangana,
            Autonomous,
            APlusPlus,
            cutoffs(&[(2024, 5500)]),
            "₹1,35,000 per year",
        ),
        UniversityRecord::new(
            "kakatiya-university",
            "Kakatiya University",
            Telangana,
            Government,
            A,
            cutoffs(&[(2024, 18000)]),
            "₹30,000 per year",
        ),
        UniversityRecord::new(
            "malla-reddy-university",
            "Malla Reddy University",
            Telangana,
            Private,
            A,
            Vec::new(),
            "₹1,60,000 per year",
        ),
        UniversityRecord::new(
            "andhra-university",
            "Andhra University College of Engineering",
            AndhraPradesh,
            Government,
            APlusPlus,
            cutoffs(&[(2024, 6000), (2023, 6400)]),
            "₹45,000 per year",
        ),
        UniversityRecord::new(
            "jntu-kakinada",
            "JNTU Kakinada",
            AndhraPradesh,
            Government,
            APlus,
            cutoffs(&[(2024, 9000)]),
            "₹38,000 per year",
        ),
        UniversityRecord::new(
            "sv-university",
            "Sri Venkateswara University",
            AndhraPradesh,
            Government,
            A,
            cutoffs(&[(2024, 15000)]),
            "₹32,000 per year",
        ),
        UniversityRecord::new(
            "kl-university",
            "KL University",
            AndhraPradesh,
            Deemed,
            APlusPlus,
            cutoffs(&[(2024, 20000)]),
            "₹2,60,000 per year",
        ),
        UniversityRecord::new(
            "vit-ap",
            "VIT-AP University",
            AndhraPradesh,
            Private,
            A,
            cutoffs(&[(2024, 25000)]),
            "₹1,98,000 per year",
        ),
        UniversityRecord::new(
            "gitam-visakhapatnam",
            "GITAM Visakhapatnam",
            AndhraPradesh,
            Deemed,
            APlusPlus,
            cutoffs(&[(2024, 30000)]),
            "₹2,50,000 per year",
        ),
    ]
}

pub(crate) fn standard_scholarships() -> Vec<Scholarship> {
    use CourseLevel::{Intermediate, Postgraduate, Undergraduate};
    use ReservationCategory::{Bc, Ews, Sc, St};

    vec![
        Scholarship {
            id: "ts-epass-post-matric".to_string(),
            name: "Telangana ePASS Post-Matric Scholarship".to_string(),
            provider: "Government of Telangana".to_string(),
            amount: "Up to ₹35,000 per year".to_string(),
            deadline: date(2026, 12, 31),
            eligibility: ScholarshipEligibility {
                max_family_income: Some(200_000),
                categories: vec![Sc, St, Bc, Ews],
                states: vec![Region::Telangana],
                min_percentage: None,
                levels: vec![Intermediate, Undergraduate, Postgraduate],
            },
        },
        Scholarship {
            id: "ap-jnanabhumi-post-matric".to_string(),
            name: "AP Jnanabhumi Post-Matric Scholarship".to_string(),
            provider: "Government of Andhra Pradesh".to_string(),
            amount: "Full tuition reimbursement".to_string(),
            deadline: date(2026, 11, 30),
            eligibility: ScholarshipEligibility {
                max_family_income: Some(250_000),
                categories: vec![Sc, St, Bc, Ews],
                states: vec![Region::AndhraPradesh],
                min_percentage: None,
                levels: vec![Undergraduate, Postgraduate],
            },
        },
        Scholarship {
            id: "central-sector-scheme".to_string(),
            name: "Central Sector Scheme of Scholarships".to_string(),
            provider: "Ministry of Education".to_string(),
            amount: "₹12,000 per year".to_string(),
            deadline: date(2026, 10, 31),
            eligibility: ScholarshipEligibility {
                max_family_income: Some(450_000),
                categories: Vec::new(),
                states: Vec::new(),
                min_percentage: Some(80.0),
                levels: vec![Undergraduate],
            },
        },
        Scholarship {
            id: "inspire-she".to_string(),
            name: "INSPIRE Scholarship for Higher Education".to_string(),
            provider: "Department of Science and Technology".to_string(),
            amount: "₹80,000 per year".to_string(),
            deadline: date(2026, 11, 15),
            eligibility: ScholarshipEligibility {
                max_family_income: None,
                categories: Vec::new(),
                states: Vec::new(),
                min_percentage: Some(90.0),
                levels: vec![Undergraduate],
            },
        },
        Scholarship {
            id: "hdfc-badhte-kadam".to_string(),
            name: "HDFC Badhte Kadam Scholarship".to_string(),
            provider: "HDFC Bank".to_string(),
            amount: "₹1,00,000".to_string(),
            deadline: date(2026, 12, 15),
            eligibility: ScholarshipEligibility {
                max_family_income: Some(600_000),
                categories: Vec::new(),
                states: Vec::new(),
                min_percentage: Some(60.0),
                levels: vec![Undergraduate, Postgraduate],
            },
        },
        Scholarship {
            id: "reliance-foundation-ug".to_string(),
            name: "Reliance Foundation Undergraduate Scholarship".to_string(),
            provider: "Reliance Foundation".to_string(),
            amount: "₹2,00,000".to_string(),
            deadline: date(2026, 10, 6),
            eligibility: ScholarshipEligibility {
                max_family_income: Some(1_500_000),
                categories: Vec::new(),
                states: Vec::new(),
                min_percentage: Some(60.0),
                levels: vec![Undergraduate],
            },
        },
    ]
}
