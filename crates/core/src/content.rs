//! Static page content. Every string here is shown to the reader verbatim.

use serde::Serialize;

/// One entry in the career timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    /// Display name, also the tab label. Unique across [`ROADMAP`].
    pub phase: &'static str,
    pub description: &'static str,
    /// Technologies in display order.
    pub tech: &'static [&'static str],
    pub highlight: &'static str,
}

pub const ROADMAP: [RoadmapPhase; 3] = [
    RoadmapPhase {
        phase: "Enterprise APIs",
        description: "Designed modular ASP.NET Core microservices with CQRS and MediatR, supporting 50k+ daily active users.",
        tech: &["ASP.NET Core", "EF Core", "PostgreSQL", "Redis"],
        highlight: "Implemented a resilient message bus with retries + backoff that cut integration failures by 38%.",
    },
    RoadmapPhase {
        phase: "Realtime Collaboration",
        description: "Built SignalR-driven whiteboarding and document syncing with optimistic concurrency and CRDT merges.",
        tech: &["SignalR", "Azure Service Bus", "Blazor"],
        highlight: "Achieved <100ms sync latency across continents by tuning hubs + batching protocol frames.",
    },
    RoadmapPhase {
        phase: "Tooling & DX",
        description: "Crafted Roslyn analyzers and Source Generators to enforce architectural rules and generate mapping layers.",
        tech: &["Roslyn", "Source Generators", "MSBuild"],
        highlight: "Slashed manual boilerplate by 70% while guaranteeing architectural guardrails in CI.",
    },
];

pub const SAMPLE_SNIPPET: &str = r#"public static class Pipeline
{
    public static IServiceCollection AddResilientHttpClient(this IServiceCollection services)
    {
        services.AddHttpClient("external")
            .AddPolicyHandler(HttpPolicyExtensions
                .HandleTransientHttpError()
                .OrResult(msg => msg.StatusCode == HttpStatusCode.TooManyRequests)
                .WaitAndRetryAsync(Backoff.DecorrelatedJitterBackoffV2(
                    medianFirstRetryDelay: TimeSpan.FromMilliseconds(250),
                    retryCount: 5
                )));

        return services;
    }
}"#;

pub const SAMPLE_LANGUAGE: &str = "csharp";
pub const SAMPLE_LABEL: &str = "Sample pattern";
pub const SAMPLE_ARIA_LABEL: &str = "Resilient pipeline sample";

pub const HERO_EYEBROW: &str = "C# / .NET expertise";
pub const HERO_HEADING: &str = "Production-grade C# delivered on autopilot";
pub const HERO_BODY: &str = "From greenfield APIs to platform refactors, I architect, implement, and harden C# systems that ship. Robust patterns, measurable outcomes, and relentless automation are the baseline.";

pub const TIMELINE_ARIA_LABEL: &str = "Delivery track record";
pub const TECH_ARIA_LABEL: &str = "Key technologies";

/// Document-level metadata registered by the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub lang: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAGE_META: PageMeta = PageMeta {
    lang: "en",
    title: "C# Skills Showcase",
    description: "Interactive overview of C# expertise delivered by an autonomous AI developer.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_are_unique() {
        let mut names: Vec<_> = ROADMAP.iter().map(|p| p.phase).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ROADMAP.len());
    }

    #[test]
    fn snippet_is_trimmed() {
        assert!(SAMPLE_SNIPPET.starts_with("public static class Pipeline"));
        assert!(SAMPLE_SNIPPET.ends_with('}'));
        assert_eq!(SAMPLE_SNIPPET.lines().count(), 16);
    }
}
