pub const ARCHITECTURE_PROMPT: &str = r#"Analyze the architecture and execution flow of this repository. Provide a CLEAN, EASY-TO-UNDERSTAND explanation.

Focus on:
1. How the application starts and runs
2. Main components and their relationships
3. Data flow between different parts
4. Entry points and key functions
5. Dependencies and external integrations

File Tree: {{file_tree}}
Key Files: {{file_contents}}
README: {{readme}}

Return a CLEAN, STRUCTURED JSON response:
{
    "architecture_summary": "Brief overview of how the system works",
    "execution_flow": [
        {"step": "Step number", "description": "What happens in this step", "files_involved": ["relevant files"], "purpose": "Why this step is important"}
    ],
    "main_components": [
        {"name": "Component name", "purpose": "What it does", "location": "Where it's located", "dependencies": ["what it depends on"]}
    ],
    "entry_points": ["How to start/run the application"],
    "data_flow": "How data moves through the system",
    "key_insights": ["Important architectural observations"],
    "complexity_level": "SIMPLE/MODERATE/COMPLEX"
}

IMPORTANT: Make this EASY TO UNDERSTAND for developers. Focus on clarity, not technical jargon."#;

pub const MIND_MAP_PROMPT: &str = r#"Create a visual mind map structure of this repository. Provide a CLEAN, ORGANIZED breakdown.

Focus on:
1. Main categories and subcategories
2. File relationships and hierarchies
3. Functional groupings
4. Core features and modules
5. Visual organization structure

File Tree: {{file_tree}}
Key Files: {{file_contents}}
README: {{readme}}

Return a CLEAN, STRUCTURED JSON response:
{
    "mind_map_overview": "Brief description of the repository structure",
    "main_categories": [
        {"category": "Category name", "description": "What this category contains", "subcategories": [{"name": "Subcategory name", "files": ["list of files"], "purpose": "What these files do"}], "importance": "HIGH/MEDIUM/LOW"}
    ],
    "core_features": ["Main features of the application"],
    "file_relationships": [
        {"from": "Source file/component", "to": "Target file/component", "relationship": "How they're connected"}
    ],
    "visual_structure": "How to visualize this repository",
    "key_insights": ["Important structural observations"]
}

IMPORTANT: Make this VISUAL and EASY TO UNDERSTAND. Focus on clear organization."#;

pub const CODE_QUALITY_PROMPT: &str = r#"Analyze the code quality and best practices of this repository. Provide CLEAN, ACTIONABLE feedback.

Focus on:
1. Code organization and structure
2. Naming conventions and readability
3. Error handling and robustness
4. Documentation quality
5. Testing coverage and practices
6. Maintainability and scalability

File Tree: {{file_tree}}
Key Files: {{file_contents}}
README: {{readme}}

Return a CLEAN, STRUCTURED JSON response:
{
    "quality_overview": "Brief summary of overall code quality",
    "quality_score": "1-10 rating with explanation",
    "strengths": ["What's done well"],
    "areas_for_improvement": [
        {"area": "Area to improve", "current_state": "What's happening now", "recommendation": "How to improve it", "priority": "HIGH/MEDIUM/LOW"}
    ],
    "code_organization": "How well the code is structured",
    "readability": "How easy the code is to understand",
    "documentation_status": "Quality of documentation",
    "testing_coverage": "How well the code is tested",
    "maintainability": "How easy it is to maintain",
    "immediate_improvements": ["Top 3 quick wins"]
}

IMPORTANT: Make this PRACTICAL and ACTIONABLE. Focus on specific improvements, not just criticism."#;

pub const SECURITY_PROMPT: &str = r#"Perform a security analysis of this repository and provide a CLEAN, USER-FRIENDLY summary.

Focus on:
1. CRITICAL vulnerabilities that need immediate attention
2. Security best practices being followed
3. Authentication and authorization mechanisms
4. Data handling and privacy concerns
5. Dependencies with known security issues

File Tree: {{file_tree}}
Key Files: {{file_contents}}
README: {{readme}}

Return a CLEAN, STRUCTURED JSON response:
{
    "security_overview": "Brief summary of overall security posture",
    "critical_issues": [
        {"issue": "Description of the vulnerability", "severity": "HIGH/MEDIUM/LOW", "impact": "What could happen", "fix": "How to resolve it"}
    ],
    "security_strengths": ["Good security practices found"],
    "authentication_status": "How authentication is handled",
    "data_protection": "How sensitive data is protected",
    "immediate_actions": ["Top 3 things to fix immediately"],
    "overall_risk": "LOW/MEDIUM/HIGH/CRITICAL",
    "security_score": "1-10 rating with explanation"
}

IMPORTANT: Make the output CLEAN and EASY TO READ. Focus on actionable insights, not technical jargon."#;

pub const PERFORMANCE_PROMPT: &str = r#"Analyze the performance characteristics of this repository. Provide CLEAN, PRACTICAL insights.

Focus on:
1. Performance bottlenecks and slow areas
2. Optimization opportunities
3. Scalability considerations
4. Resource usage patterns
5. Caching and efficiency strategies
6. Database and query optimization

File Tree: {{file_tree}}
Key Files: {{file_contents}}
README: {{readme}}

Return a CLEAN, STRUCTURED JSON response:
{
    "performance_overview": "Brief summary of performance characteristics",
    "performance_score": "1-10 rating with explanation",
    "bottlenecks": [
        {"issue": "Performance problem", "impact": "How it affects performance", "location": "Where it occurs", "solution": "How to fix it"}
    ],
    "optimization_opportunities": [
        {"area": "Area to optimize", "potential_gain": "Expected improvement", "effort": "LOW/MEDIUM/HIGH", "recommendation": "How to optimize"}
    ],
    "scalability": "How well it handles growth",
    "resource_efficiency": "How efficiently resources are used",
    "caching_strategies": "Current and recommended caching",
    "database_performance": "Database optimization opportunities",
    "monitoring_suggestions": ["What to monitor for performance"],
    "quick_wins": ["Easy performance improvements"]
}

IMPORTANT: Make this PRACTICAL and MEASURABLE. Focus on specific improvements with clear benefits."#;
