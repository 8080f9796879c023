//! The built-in résumé shipped with the binary.

use super::profile::{
    ApiRequest, ApiResponse, Highlight, HttpMethod, Identity, Profile, Project, SkillGroup,
    TerminalCommand,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Profile {
    pub fn builtin() -> Self {
        let identity = Identity {
            name: "Jigisa Rathod".to_string(),
            role: "Java Backend Engineer".to_string(),
            experience: "2.5+ years".to_string(),
            location: "Ahmedabad, India".to_string(),
            email: "rathodjigisa3010@gmail.com".to_string(),
            phone: "+91-6354812399".to_string(),
            linkedin: "https://www.linkedin.com/in/jigisa-rathod".to_string(),
            resume: "/jigisa_resume.pdf".to_string(),
            summary: "Java backend engineer focused on building reactive services, migrating \
                      legacy systems, and shipping real-time user experiences with Spring Boot \
                      and Micronaut."
                .to_string(),
        };

        let terminal_commands = vec![
            TerminalCommand {
                id: "whoami".to_string(),
                label: "whoami".to_string(),
                command: "whoami".to_string(),
                output: vec![
                    identity.name.clone(),
                    format!("{} | {}", identity.role, identity.location),
                    "Building resilient microservices and realtime user experiences.".to_string(),
                ],
            },
            TerminalCommand {
                id: "stack".to_string(),
                label: "stack --core".to_string(),
                command: "stack --core".to_string(),
                output: strings(&[
                    "Java 8 & 17 | Spring Boot | Micronaut",
                    "Realtime: WebSocket, Firebase, SSE",
                    "Data: MySQL, Cassandra, SQL",
                ]),
            },
            TerminalCommand {
                id: "status".to_string(),
                label: "status --current".to_string(),
                command: "status --current".to_string(),
                output: strings(&[
                    "Engineering AMS platform APIs with reactive pipelines.",
                    "Owning Micronaut migrations and performance tuning.",
                ]),
            },
            TerminalCommand {
                id: "contact".to_string(),
                label: "contact --open".to_string(),
                command: "contact --open".to_string(),
                output: vec![
                    format!("email: {}", identity.email),
                    format!("phone: {}", identity.phone),
                    format!("linkedin: {}", identity.linkedin_display()),
                ],
            },
        ];

        let api_requests = vec![
            ApiRequest {
                id: "profile".to_string(),
                method: HttpMethod::Get,
                url: "https://api.jigisarathod.dev/v1/profile".to_string(),
                description: "Core profile for recruiters: skills, experience, links.".to_string(),
                curl: "curl -X GET https://api.jigisarathod.dev/v1/profile \
                       -H 'Accept: application/json'"
                    .to_string(),
                response: ApiResponse {
                    status: "200 OK".to_string(),
                    body: strings(&[
                        "{",
                        "  \"name\": \"Jigisa Rathod\",",
                        "  \"role\": \"Java Backend Engineer\",",
                        "  \"experience\": \"2.5+ years\",",
                        "  \"stack\": [\"Java 17\", \"Spring Boot\", \"Micronaut\"],",
                        "  \"contact\": {",
                        "    \"email\": \"rathodjigisa3010@gmail.com\",",
                        "    \"linkedin\": \"https://www.linkedin.com/in/jigisa-rathod\"",
                        "  }",
                        "}",
                    ]),
                },
            },
            ApiRequest {
                id: "focus".to_string(),
                method: HttpMethod::Post,
                url: "https://api.jigisarathod.dev/v1/focus".to_string(),
                description: "What I am solving right now on AMS platform.".to_string(),
                curl: "curl -X POST https://api.jigisarathod.dev/v1/focus \
                       -H 'Content-Type: application/json' -d '{\"module\":\"ams-reporting\"}'"
                    .to_string(),
                response: ApiResponse {
                    status: "202 Accepted".to_string(),
                    body: strings(&[
                        "{",
                        "  \"module\": \"ams-reporting\",",
                        "  \"status\": \"in-progress\",",
                        "  \"nextDeliverable\": \"Streaming PDF exports backed by Micronaut\",",
                        "  \"lastDeployed\": \"2025-08-25\",",
                        "  \"owner\": \"Jigisa Rathod\"",
                        "}",
                    ]),
                },
            },
        ];

        Self {
            identity,
            hero_tags: strings(&[
                "Java 17 first",
                "Spring Boot & Micronaut",
                "Realtime APIs",
                "Performance tuning",
            ]),
            terminal_commands,
            api_requests,
            about: strings(&[
                "I work across the full backend lifecycle: deep-diving legacy code, designing new \
                 modules, pairing with QA on performance tests, and automating releases. My \
                 playbook mixes Micronaut for reactive services, Spring Boot for battle-tested \
                 modules, and a focus on observability so production never feels like a black box.",
            ]),
            highlights: vec![
                Highlight {
                    title: "Modern Java delivery".to_string(),
                    description: "Upgrades monoliths to Java 17 microservices with clean \
                                  interfaces, circuit breakers, and observability baked in."
                        .to_string(),
                },
                Highlight {
                    title: "Secure by design".to_string(),
                    description: "Implements Azure AD, JWT, and RBAC layers that keep enterprise \
                                  data safe without slowing delivery."
                        .to_string(),
                },
                Highlight {
                    title: "Performance obsessed".to_string(),
                    description: "Proves impact with load testing, profiling, and focused \
                                  refactors that cut latency and boost throughput."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "CSS Module - Java Upgrade & Realtime Alerts".to_string(),
                    period: "May 2023 - Dec 2023".to_string(),
                    summary: "Led the modernization of a core compliance module while keeping \
                              24/7 uptime for global teams."
                        .to_string(),
                    impacts: strings(&[
                        "Upgraded from Java 8 to 17 with modular builds and zero downtime cutovers.",
                        "Introduced Micronaut alongside Spring Boot for reactive workloads and \
                         faster cold starts.",
                        "Delivered WebSocket and Firebase channels to broadcast alerts in under 2 \
                         seconds.",
                    ]),
                    stack: strings(&[
                        "Java 17",
                        "Micronaut",
                        "Spring Boot",
                        "Firebase",
                        "WebSocket",
                        "Hibernate",
                        "SQL",
                    ]),
                },
                Project {
                    title: "TRP - Data R&D Initiative".to_string(),
                    period: "Jan 2024 - Jun 2024".to_string(),
                    summary: "Explored new data pipelines and storage strategies for a trading \
                              research platform."
                        .to_string(),
                    impacts: strings(&[
                        "Migrated Spring Boot services to Micronaut, enabling reactive streaming \
                         APIs.",
                        "Evaluated Cassandra against SQL workloads and validated with JMeter and \
                         Locust.",
                    ]),
                    stack: strings(&[
                        "Micronaut",
                        "Spring Boot",
                        "Cassandra",
                        "Locust",
                        "JMeter",
                        "REST APIs",
                    ]),
                },
                Project {
                    title: "AMS Platform - Reactive APIs & Reporting".to_string(),
                    period: "Jul 2024 - Present".to_string(),
                    summary: "Owning backend build-out for a modular asset management system \
                              with dynamic reporting."
                        .to_string(),
                    impacts: strings(&[
                        "Integrated legacy services, hardened authentication, and built \
                         cross-team REST APIs.",
                        "Automated PDF, CSV, and Excel exports with JasperReports and streaming \
                         pipelines.",
                        "Guiding teams through Micronaut adoption for event-driven microservices.",
                    ]),
                    stack: strings(&[
                        "Java 17",
                        "Micronaut",
                        "Spring Boot",
                        "JasperReports",
                        "SQL",
                        "REST",
                    ]),
                },
            ],
            skill_groups: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: strings(&["Java 8/17", "C", "C++", "HTML"]),
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    items: strings(&["Spring Boot", "Micronaut", "Hibernate", "Thymeleaf"]),
                },
                SkillGroup {
                    category: "Data & Messaging".to_string(),
                    items: strings(&[
                        "Cassandra",
                        "MySQL",
                        "SQL",
                        "WebSocket",
                        "Socket.IO",
                        "Firebase",
                    ]),
                },
                SkillGroup {
                    category: "Security".to_string(),
                    items: strings(&["Azure AD (MSAL)", "JWT", "RBAC", "OAuth 2.0"]),
                },
                SkillGroup {
                    category: "Quality & Tooling".to_string(),
                    items: strings(&["JMeter", "Locust", "Git", "Maven"]),
                },
                SkillGroup {
                    category: "Reporting".to_string(),
                    items: strings(&["JasperReports", "Custom PDF pipelines"]),
                },
            ],
            achievements: strings(&[
                "Winner in inter-college IT events including Code of Conduct, E-Hunt, Googler, \
                 and Web Crawler.",
                "Google Analytics 360 and Google Tag Manager Fundamentals (2020).",
            ]),
            recent_focus: strings(&[
                "Scaling Micronaut services, tuning GraalVM native images, and metrics-first \
                 rollouts.",
                "Designing reporting pipelines that stream data to JasperReports with audit \
                 trails.",
                "Mentoring teams on Java best practices, code reviews, and observability \
                 dashboards.",
            ]),
        }
    }
}
