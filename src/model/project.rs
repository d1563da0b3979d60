//! Project catalog - fixed case-study records compiled into the binary

/// One case study with its five narrative fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub problem: &'static str,
    pub research: &'static str,
    pub solution: &'static str,
    pub outcomes: &'static str,
}

/// The fixed ordered catalog; detail views index into this by position
pub const CATALOG: [ProjectRecord; 4] = [
    ProjectRecord {
        title: "Digital Banking App Redesign",
        problem: "Users were struggling with complex navigation and lengthy processes for basic banking tasks. The existing app had poor user experience with a 2.1 star rating and high abandonment rates during critical financial transactions.",
        research: "Conducted user interviews with 150+ customers across different demographics, analyzed app analytics to identify pain points, performed competitive analysis of top banking apps, and created user journey maps to understand friction points.",
        solution: "Redesigned information architecture with user-centric navigation, simplified user flows for common tasks, implemented a personalized dashboard based on user behavior, and introduced progressive disclosure to reduce cognitive load.",
        outcomes: "40% increase in daily active users, 25% reduction in customer support tickets, improved app rating to 4.2 stars, and 60% faster task completion times for core banking functions.",
    },
    ProjectRecord {
        title: "AI-Powered Recommendation Engine",
        problem: "Low product discovery and poor conversion rates on the e-commerce platform. Users were having difficulty finding relevant products, leading to high bounce rates and missed revenue opportunities.",
        research: "Analyzed user behavior patterns across 2M+ sessions, conducted market research on recommendation algorithms, performed A/B tests on different recommendation approaches, and interviewed customers about their shopping preferences.",
        solution: "Implemented machine learning-based recommendation engine combining collaborative filtering and content-based algorithms, personalized product suggestions based on browsing history, and real-time adaptation to user preferences.",
        outcomes: "30% increase in conversion rate, ₹50CR additional revenue in the first year, 45% improvement in average order value, and 2x increase in user session duration.",
    },
    ProjectRecord {
        title: "Supply Chain Optimization Platform",
        problem: "Manual processes causing significant delays and inefficiencies in supply chain management. Vendors and retailers were struggling with paper-based workflows, leading to errors and lost opportunities.",
        research: "Interviewed 100+ vendors and retailers to understand pain points, mapped current state processes to identify bottlenecks, analyzed industry best practices, and studied competitor solutions in the B2B space.",
        solution: "Built automated platform with real-time tracking capabilities, digital documentation workflow, integrated analytics dashboard, and automated notifications for critical milestones in the supply chain.",
        outcomes: "60% reduction in order processing time, successfully onboarded 500+ vendors, achieved ₹25CR GMV in first 6 months, and improved vendor satisfaction scores by 40%.",
    },
    ProjectRecord {
        title: "Customer Support Chatbot Integration",
        problem: "High volume of repetitive customer queries overwhelming the support team, leading to long response times and decreased customer satisfaction. 70% of tickets were routine inquiries that could be automated.",
        research: "Analyzed support ticket patterns over 12 months, categorized query types, studied customer feedback on response times, benchmarked against industry standards, and researched NLP capabilities for customer service.",
        solution: "Implemented NLP-powered chatbot with machine learning capabilities, created escalation workflows for complex queries, integrated with existing CRM system, and established continuous learning feedback loops.",
        outcomes: "70% reduction in average response time, 85% first-contact resolution rate for common queries, improved customer satisfaction scores by 35%, and freed up support team for high-value interactions.",
    },
];

/// Look up a record by catalog position
pub fn get(index: usize) -> Option<&'static ProjectRecord> {
    CATALOG.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_records_with_all_fields() {
        assert_eq!(CATALOG.len(), 4);
        for record in &CATALOG {
            assert!(!record.title.is_empty());
            assert!(!record.problem.is_empty());
            assert!(!record.research.is_empty());
            assert!(!record.solution.is_empty());
            assert!(!record.outcomes.is_empty());
        }
    }

    #[test]
    fn test_get_within_and_out_of_bounds() {
        assert_eq!(get(0).map(|r| r.title), Some("Digital Banking App Redesign"));
        assert_eq!(get(3).map(|r| r.title), Some("Customer Support Chatbot Integration"));
        assert!(get(4).is_none());
        assert!(get(usize::MAX).is_none());
    }
}
