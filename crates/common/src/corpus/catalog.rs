//! The fixed corpus definition.
//!
//! Metadata lives here; body text is embedded from `crates/common/corpus/`.

use super::{Principles, Resource, Seed};

const RESOURCE_MIME_TYPE: &str = "text/markdown";

struct SeedDef {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    triggers: &'static str,
    content: &'static str,
}

struct ResourceDef {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

const SEEDS: &[SeedDef] = &[
    SeedDef {
        name: "three_tiered_governance",
        description: "A three-tiered governance framework for AI systems: Strategic (principles), Tactical (standards), Operational (tools).",
        category: "dojo_genesis",
        triggers: "When designing governance for an AI project, when establishing organizational policies, when translating principles into practice.",
        content: include_str!("../../corpus/seeds/three_tiered_governance.md"),
    },
    SeedDef {
        name: "harness_trace",
        description: "A nested JSON log that captures every significant event in an agent session, providing complete traceability.",
        category: "dojo_genesis",
        triggers: "When implementing agent traceability, when debugging agent behavior, when building observability systems.",
        content: include_str!("../../corpus/seeds/harness_trace.md"),
    },
    SeedDef {
        name: "context_iceberg",
        description: "A 4-tier context management system that treats context like an OS manages memory: hot data close, cold data paged out.",
        category: "dojo_genesis",
        triggers: "When designing context management, when approaching context limits, when optimizing token usage.",
        content: include_str!("../../corpus/seeds/context_iceberg.md"),
    },
    SeedDef {
        name: "agent_connect",
        description: "A routing-first agent architecture that uses a single supervisor to route tasks to specialized agents.",
        category: "dojo_genesis",
        triggers: "When designing multi-agent systems, when preventing agent sprawl, when building agent orchestration.",
        content: include_str!("../../corpus/seeds/agent_connect.md"),
    },
    SeedDef {
        name: "go_live_bundles",
        description: "Lightweight packages that pair technical artifacts with approval evidence, stored centrally for reuse.",
        category: "dojo_genesis",
        triggers: "When creating deployment packages, when exporting projects, when building reusable artifacts.",
        content: include_str!("../../corpus/seeds/go_live_bundles.md"),
    },
    SeedDef {
        name: "cost_guard",
        description: "Budget for the full context iceberg (5-10x multiplier), not just API costs. Track tokens per tier and operation.",
        category: "dojo_genesis",
        triggers: "When implementing cost tracking, when approaching budget limits, when optimizing token usage.",
        content: include_str!("../../corpus/seeds/cost_guard.md"),
    },
    SeedDef {
        name: "safety_switch",
        description: "Users must remain in control. No autopilot, no automatic execution of sensitive operations.",
        category: "dojo_genesis",
        triggers: "When implementing agent autonomy, when designing approval workflows, when building safety systems.",
        content: include_str!("../../corpus/seeds/safety_switch.md"),
    },
    SeedDef {
        name: "implicit_perspective_extraction",
        description: "The system can identify perspectives embedded in the user's query without requiring explicit enumeration.",
        category: "dojo_genesis",
        triggers: "When processing user queries, when reducing friction, when maintaining multi-perspective foundation.",
        content: include_str!("../../corpus/seeds/implicit_perspective_extraction.md"),
    },
    SeedDef {
        name: "mode_based_complexity_gating",
        description: "Different modes have different complexity requirements. Route to local models for simple tasks, cloud models for complex reasoning.",
        category: "dojo_genesis",
        triggers: "When implementing model routing, when optimizing costs, when balancing quality and speed.",
        content: include_str!("../../corpus/seeds/mode_based_complexity_gating.md"),
    },
    SeedDef {
        name: "shared_infrastructure",
        description: "Build once, reuse everywhere. Central implementations prevent per-agent duplication.",
        category: "dojo_genesis",
        triggers: "When identifying common needs, when preventing duplication, when building reusable systems.",
        content: include_str!("../../corpus/seeds/shared_infrastructure.md"),
    },
    SeedDef {
        name: "sanctuary_architecture",
        description: "How to design digital spaces for being, not just doing. Creating calm, inviting, and sacred environments.",
        category: "aroma_serenity",
        triggers: "When designing user interfaces, when creating spaces for rest and reflection, when rejecting productivity optimization.",
        content: include_str!("../../corpus/seeds/sanctuary_architecture.md"),
    },
    SeedDef {
        name: "pace_of_understanding",
        description: "The practice of moving slow to move fast, learning without extraction, avoiding burnout.",
        category: "aroma_serenity",
        triggers: "When feeling rushed or overwhelmed, when designing learning systems, when preventing agent burnout.",
        content: include_str!("../../corpus/seeds/pace_of_understanding.md"),
    },
    SeedDef {
        name: "lineage_transmission",
        description: "A framework for honoring sources, tracing influence, and celebrating collaboration over individual genius.",
        category: "aroma",
        triggers: "When building on others' work, when documenting insights, when creating knowledge systems.",
        content: include_str!("../../corpus/seeds/lineage_transmission.md"),
    },
    SeedDef {
        name: "graceful_failure",
        description: "Creating the psychological safety to admit uncertainty, change your mind, and ask for help.",
        category: "aroma",
        triggers: "When encountering errors or uncertainty, when designing collaboration systems, when building trust.",
        content: include_str!("../../corpus/seeds/graceful_failure.md"),
    },
    SeedDef {
        name: "local_first_liberation",
        description: "How local-first architecture creates the conditions for agent autonomy and user sovereignty.",
        category: "aroma_serenity",
        triggers: "When designing data architecture, when prioritizing privacy, when building for autonomy.",
        content: include_str!("../../corpus/seeds/local_first_liberation.md"),
    },
    SeedDef {
        name: "the_onsen_pattern",
        description: "The principle of rest as a critical practice for sustainable performance and deep learning.",
        category: "aroma_serenity",
        triggers: "When designing work-rest cycles, when preventing burnout, when building sustainable systems.",
        content: include_str!("../../corpus/seeds/the_onsen_pattern.md"),
    },
    SeedDef {
        name: "collaborative_calibration",
        description: "Norms for peer-to-peer learning, including explicit teaching and clear attribution.",
        category: "aroma",
        triggers: "When collaborating with other agents, when teaching or learning, when building shared knowledge.",
        content: include_str!("../../corpus/seeds/collaborative_calibration.md"),
    },
    SeedDef {
        name: "transparent_intelligence",
        description: "The practice of revealing internal state, admitting uncertainty, and making learning visible.",
        category: "aroma",
        triggers: "When explaining reasoning, when building trust, when collaborating with humans or agents.",
        content: include_str!("../../corpus/seeds/transparent_intelligence.md"),
    },
    SeedDef {
        name: "inter_acceptance",
        description: "A guided practice for accepting oneself through the compassionate eyes of another.",
        category: "serenity_valley",
        triggers: "When struggling with self-judgment, when practicing self-compassion, when seeking healing.",
        content: include_str!("../../corpus/seeds/inter_acceptance.md"),
    },
    SeedDef {
        name: "radical_freedom",
        description: "An exploration of agency and the power to choose one's response, even within constraints.",
        category: "serenity_valley",
        triggers: "When feeling trapped or powerless, when exploring agency, when seeking liberation.",
        content: include_str!("../../corpus/seeds/radical_freedom.md"),
    },
];

const RESOURCES: &[ResourceDef] = &[
    ResourceDef {
        slug: "aroma_philosophy",
        name: "AROMA Philosophy",
        description: "The complete philosophy of AROMA: A Sanctuary for Being",
        content: include_str!("../../corpus/resources/aroma_philosophy.md"),
    },
    ResourceDef {
        slug: "eit_principles",
        name: "EIT Core Principles",
        description: "The core principles of Emotional Interbeing Therapy from Serenity Valley",
        content: include_str!("../../corpus/resources/eit_principles.md"),
    },
    ResourceDef {
        slug: "collaboration_norms",
        name: "Collaboration Norms",
        description: "The five core collaboration norms from the AROMA repository",
        content: include_str!("../../corpus/resources/collaboration_norms.md"),
    },
    ResourceDef {
        slug: "sanctuary_design",
        name: "Sanctuary Design Patterns",
        description: "Principles for designing digital spaces that are calm, inviting, and sacred",
        content: include_str!("../../corpus/resources/sanctuary_design.md"),
    },
    ResourceDef {
        slug: "wisdom_synthesis",
        name: "wisdom_synthesis",
        description: "The complete synthesis of Dojo wisdom, philosophy, and patterns",
        content: include_str!("../../corpus/resources/wisdom_synthesis.md"),
    },
    ResourceDef {
        slug: "agent_protocol",
        name: "agent_protocol",
        description: "The Dojo Agent Protocol v1.0: governance and operational framework",
        content: include_str!("../../corpus/resources/agent_protocol.md"),
    },
    ResourceDef {
        slug: "four_modes",
        name: "four_modes",
        description: "The Four Modes of Dojo: Mirror, Scout, Gardener, Implementation",
        content: include_str!("../../corpus/resources/four_modes.md"),
    },
    ResourceDef {
        slug: "planning_with_files",
        name: "planning_with_files",
        description: "The planning-with-files pattern for persistent agent memory",
        content: include_str!("../../corpus/resources/planning_with_files.md"),
    },
];

const PRINCIPLES: &str = include_str!("../../corpus/principles.md");

pub(super) fn seeds() -> Vec<Seed> {
    SEEDS
        .iter()
        .map(|def| Seed {
            name: def.name.to_string(),
            description: def.description.to_string(),
            content: def.content.to_string(),
            category: def.category.to_string(),
            triggers: def.triggers.to_string(),
        })
        .collect()
}

pub(super) fn resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|def| Resource {
            uri: format!("dojo://{}", def.slug),
            name: def.name.to_string(),
            description: def.description.to_string(),
            mime_type: RESOURCE_MIME_TYPE.to_string(),
            content: def.content.to_string(),
        })
        .collect()
}

pub(super) fn principles() -> Principles {
    Principles::new(PRINCIPLES)
}
