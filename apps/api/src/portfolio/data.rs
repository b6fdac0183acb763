//! Static portfolio content, built once and shared for the life of the process.

use std::sync::OnceLock;

use crate::portfolio::models::{CaseStudy, Project, ProjectCategory, Skill, SkillCategory};

pub fn projects() -> &'static [Project] {
    static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
    PROJECTS.get_or_init(build_projects)
}

pub fn skills() -> &'static [Skill] {
    static SKILLS: OnceLock<Vec<Skill>> = OnceLock::new();
    SKILLS.get_or_init(build_skills)
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    projects().iter().find(|p| p.id == id)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Distributed Test Harness".to_string(),
            description: "A cloud-native test orchestrator reducing execution cycles by 93%."
                .to_string(),
            tags: strings(&["Java 21", "Spring Boot", "Kubernetes", "Redis"]),
            link: "#".to_string(),
            category: ProjectCategory::Automation,
            case_study: CaseStudy {
                outcome: "Reduced test execution time from 4 hours to 15 minutes while maintaining 99% stability.".to_string(),
                context: "A global e-commerce platform faced release bottlenecks from 5,000+ UI tests running sequentially on a legacy Jenkins setup.".to_string(),
                contributions: strings(&[
                    "Architected a Spring Boot micro-orchestrator on Java 21 virtual threads for non-blocking I/O.",
                    "Scaled Selenium nodes dynamically on Kubernetes with custom operators.",
                    "Built a Redis-backed state machine for test retries and session persistence.",
                    "Shipped a Grafana dashboard for live execution monitoring.",
                ]),
                challenges: strings(&[
                    "Network latency: localized container registries and slimmer Docker layers.",
                    "Resource contention: custom pod priority and pre-emption in the scheduler.",
                    "Flaky tests: quarantine logic that isolates unstable tests from the main pipeline.",
                ]),
                improvements: strings(&[
                    "Classify failures automatically from historical logs.",
                    "Predictive test selection to run only impacted scenarios per commit.",
                ]),
            },
        },
        Project {
            id: "2".to_string(),
            title: "Quality Gateway Plugin".to_string(),
            description: "Enterprise Jenkins plugin enforcing BDD coverage and contract testing standards.".to_string(),
            tags: strings(&["Java", "Jenkins API", "Pact.io", "Cucumber"]),
            link: "#".to_string(),
            category: ProjectCategory::Backend,
            case_study: CaseStudy {
                outcome: "Zero production incidents from API breaking changes over 12 months.".to_string(),
                context: "40+ teams on a microservices ecosystem kept hitting integration failures from mismatched API versions and missing tests.".to_string(),
                contributions: strings(&[
                    "Wrote a Jenkins plugin that gates deployments on mandatory BDD coverage thresholds.",
                    "Wired Pact.io consumer-driven contract tests into the CI/CD pipeline.",
                    "Built a Gherkin analyzer that checks scenarios follow Given-When-Then structure.",
                    "Aggregated quality metrics from every microservice into one reporting hub.",
                ]),
                challenges: strings(&[
                    "Team adoption: a CLI that generates contract boilerplate.",
                    "Version drift: a global version registry keeping consumers and providers aligned.",
                    "Pipeline latency: contract verification runs in parallel with unit tests.",
                ]),
                improvements: strings(&[
                    "An IntelliJ plugin showing gateway status while coding.",
                    "Suggest missing Gherkin scenarios from new code changes.",
                ]),
            },
        },
        Project {
            id: "3".to_string(),
            title: "Retail API Engine".to_string(),
            description: "High-performance inventory engine optimized for cloud-native reliability.".to_string(),
            tags: strings(&["Spring Boot", "PostgreSQL", "Hazelcast", "Docker"]),
            link: "#".to_string(),
            category: ProjectCategory::Backend,
            case_study: CaseStudy {
                outcome: "Peak throughput up 500% with P99 latency held under 100ms.".to_string(),
                context: "A high-traffic inventory system had to move off a legacy monolith onto a scalable Java 21 architecture.".to_string(),
                contributions: strings(&[
                    "Split reads and writes with CQRS in the core business logic.",
                    "Offloaded 70% of database reads to a Hazelcast distributed cache.",
                    "Tuned SQL through indexing and Hibernate query work.",
                    "Held critical domains to 90% JUnit coverage.",
                ]),
                challenges: strings(&[
                    "Memory leaks: found and fixed with Eclipse MAT and JProfiler.",
                    "Cache consistency: transactional notifications in the cache layer.",
                    "Cold starts: critical services moved to GraalVM native images.",
                ]),
                improvements: strings(&[
                    "A fully reactive persistence layer on R2DBC.",
                    "Event sourcing for an immutable audit trail of inventory movements.",
                ]),
            },
        },
    ]
}

fn build_skills() -> Vec<Skill> {
    [
        ("Java", 95, SkillCategory::Core),
        ("Spring Boot", 90, SkillCategory::Core),
        ("Selenium", 92, SkillCategory::Testing),
        ("Cucumber", 88, SkillCategory::Testing),
        ("PostgreSQL", 82, SkillCategory::Database),
        ("Docker", 85, SkillCategory::Tools),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill {
        name: name.to_string(),
        level,
        category,
    })
    .collect()
}
