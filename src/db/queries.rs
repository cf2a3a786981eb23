//! SQL statement constants
//!
//! Contains all SQL used by the application. Every caller-supplied value
//! flows through a `$n` bind parameter.

// ---------------------------------------------------------------------------
// Citizen API
// ---------------------------------------------------------------------------

/// Dashboard aggregate counts
pub const DASHBOARD_STATS: &str = r#"
    SELECT
        (SELECT COUNT(*) FROM villages) AS total_villages,
        (SELECT COALESCE(SUM(population), 0) FROM villages) AS total_population,
        (SELECT COUNT(*) FROM development_projects WHERE project_status = 'IN_PROGRESS') AS ongoing_projects,
        (SELECT COALESCE(SUM(budget_allocated), 0) FROM development_projects) AS total_budget,
        (SELECT COUNT(*) FROM work_reviews) AS total_reviews,
        (SELECT COUNT(*) FROM complaints) AS total_complaints,
        (SELECT COUNT(*) FROM development_projects WHERE completion_percentage = 100) AS completed_projects
"#;

/// All villages, alphabetical
pub const LIST_VILLAGES: &str = r#"
    SELECT village_id, village_name, village_code, population, total_families, status, created_date
    FROM villages
    ORDER BY village_name
"#;

/// One village by id
pub const GET_VILLAGE: &str = r#"
    SELECT village_id, village_name, village_code, population, total_families, status, created_date
    FROM villages
    WHERE village_id = $1
"#;

/// Villages whose name or code contains the bound pattern
pub const SEARCH_VILLAGES: &str = r#"
    SELECT village_id, village_name, village_code, population, total_families, status, created_date
    FROM villages
    WHERE village_name ILIKE $1 OR village_code ILIKE $1
    ORDER BY village_name
"#;

pub const INSERT_VILLAGE: &str = r#"
    INSERT INTO villages (village_name, village_code, population, total_families, status, created_date)
    VALUES ($1, $2, $3, $4, 'ACTIVE', CURRENT_TIMESTAMP)
"#;

/// Resources belonging to one village
pub const VILLAGE_RESOURCES: &str = r#"
    SELECT resource_id, village_id, resource_type, resource_name, total_count,
           coverage_percentage, quality_status
    FROM resources
    WHERE village_id = $1
"#;

/// Complaints for one village with the filing villager's name, newest first
pub const VILLAGE_COMPLAINTS: &str = r#"
    SELECT c.complaint_id, c.villager_id, c.village_id, c.complaint_type, c.complaint_title,
           c.complaint_description, c.location, c.priority_level, c.status, c.filed_date,
           vl.villager_name
    FROM complaints c
    LEFT JOIN villagers vl ON c.villager_id = vl.villager_id
    WHERE c.village_id = $1
    ORDER BY c.filed_date DESC
"#;

/// Projects for one village, newest first
pub const VILLAGE_PROJECTS: &str = r#"
    SELECT project_id, village_id, project_name, budget_allocated, budget_spent,
           completion_percentage, project_status
    FROM development_projects
    WHERE village_id = $1
    ORDER BY project_id DESC
"#;

/// All complaints with village and villager names plus hours since filing
pub const LIST_COMPLAINTS: &str = r#"
    SELECT c.complaint_id, c.villager_id, c.village_id, c.complaint_type, c.complaint_title,
           c.complaint_description, c.location, c.priority_level, c.status, c.filed_date,
           v.village_name, vl.villager_name,
           ROUND((EXTRACT(EPOCH FROM (NOW() - c.filed_date)) / 3600.0)::numeric, 1)::double precision AS hours_ago
    FROM complaints c
    JOIN villages v ON c.village_id = v.village_id
    LEFT JOIN villagers vl ON c.villager_id = vl.villager_id
    ORDER BY c.filed_date DESC
"#;

pub const INSERT_COMPLAINT: &str = r#"
    INSERT INTO complaints (villager_id, village_id, complaint_type, complaint_title,
                            complaint_description, location, priority_level, status, filed_date)
    VALUES ($1, $2, $3, $4, $5, $6, $7, 'PENDING', CURRENT_TIMESTAMP)
"#;

/// Current status of one complaint
pub const GET_COMPLAINT_STATUS: &str = r#"
    SELECT status FROM complaints WHERE complaint_id = $1
"#;

pub const UPDATE_COMPLAINT_STATUS: &str = r#"
    UPDATE complaints SET status = $1 WHERE complaint_id = $2
"#;

/// All projects with their village name, newest first
pub const LIST_PROJECTS: &str = r#"
    SELECT p.project_id, p.village_id, p.project_name, p.budget_allocated, p.budget_spent,
           p.completion_percentage, p.project_status, v.village_name
    FROM development_projects p
    JOIN villages v ON p.village_id = v.village_id
    ORDER BY p.project_id DESC
"#;

/// All resources grouped by village then type
pub const LIST_RESOURCES: &str = r#"
    SELECT resource_id, village_id, resource_type, resource_name, total_count,
           coverage_percentage, quality_status
    FROM resources
    ORDER BY village_id, resource_type
"#;

pub const INSERT_RESOURCE: &str = r#"
    INSERT INTO resources (village_id, resource_type, resource_name, total_count,
                           coverage_percentage, quality_status)
    VALUES ($1, $2, $3, $4, $5, $6)
"#;

pub const INSERT_REVIEW: &str = r#"
    INSERT INTO work_reviews (project_id, villager_id, quality_rating, review_comments, review_date)
    VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP)
"#;

// ---------------------------------------------------------------------------
// Admin reporting
// ---------------------------------------------------------------------------

/// Executive summary: one labeled metric per row
pub const REPORT_SUMMARY: &str = r#"
    SELECT 'Total Villages' AS metric, COUNT(*)::bigint AS value FROM villages
    UNION ALL
    SELECT 'Total Population', COALESCE(SUM(population), 0)::bigint FROM villages
    UNION ALL
    SELECT 'Total Families', COALESCE(SUM(total_families), 0)::bigint FROM villages
    UNION ALL
    SELECT 'Active Projects', COUNT(*)::bigint FROM development_projects WHERE project_status = 'IN_PROGRESS'
    UNION ALL
    SELECT 'Pending Complaints', COUNT(*)::bigint FROM complaints WHERE status = 'PENDING'
    UNION ALL
    SELECT 'Total Resources', COUNT(*)::bigint FROM resources
    UNION ALL
    SELECT 'Work Reviews', COUNT(*)::bigint FROM work_reviews
"#;

/// Villages overview for the admin dashboard
pub const REPORT_VILLAGES: &str = r#"
    SELECT village_id, village_name, village_code, population, total_families, status, created_date
    FROM villages
    ORDER BY village_id
"#;

/// Per-resource-type rollup across all villages
pub const REPORT_RESOURCES_SUMMARY: &str = r#"
    SELECT resource_type,
           COUNT(DISTINCT resource_name)::bigint AS unique_resources,
           COALESCE(SUM(total_count), 0)::bigint AS total_units,
           ROUND(AVG(coverage_percentage)::numeric, 2)::double precision AS avg_coverage,
           COUNT(DISTINCT village_id)::bigint AS villages_served
    FROM resources
    GROUP BY resource_type
    ORDER BY resource_type
"#;

/// Resource inventory per village
pub const REPORT_TOP_RESOURCES: &str = r#"
    SELECT v.village_name, r.resource_type, r.resource_name, r.total_count,
           r.coverage_percentage AS coverage, r.quality_status AS quality
    FROM resources r
    JOIN villages v ON r.village_id = v.village_id
    ORDER BY v.village_name, r.resource_type
"#;

/// Complaint counts and share by status
pub const REPORT_COMPLAINTS_STATUS: &str = r#"
    SELECT status,
           COUNT(*)::bigint AS count_complaints,
           ROUND(COUNT(*) * 100.0 / SUM(COUNT(*)) OVER (), 2)::double precision AS percentage
    FROM complaints
    GROUP BY status
    ORDER BY count_complaints DESC
"#;

/// Ten most recently filed complaints
pub const REPORT_RECENT_COMPLAINTS: &str = r#"
    SELECT c.complaint_id, v.village_name, c.complaint_type AS type, c.complaint_title AS title,
           c.status, c.priority_level AS priority, c.filed_date
    FROM complaints c
    JOIN villages v ON c.village_id = v.village_id
    ORDER BY c.filed_date DESC
    LIMIT 10
"#;

/// Budget and completion per project
pub const REPORT_PROJECT_PERFORMANCE: &str = r#"
    SELECT p.project_name, v.village_name AS village, p.budget_allocated AS budget,
           p.budget_spent AS spent, p.completion_percentage AS completion,
           p.project_status AS status
    FROM development_projects p
    JOIN villages v ON p.village_id = v.village_id
    ORDER BY p.completion_percentage DESC NULLS LAST
"#;

/// Review ratings joined back to project and village
pub const REPORT_WORK_REVIEWS: &str = r#"
    SELECT p.project_name AS project, v.village_name AS village, r.quality_rating AS rating,
           COALESCE(r.review_comments, 'No comments') AS comments
    FROM work_reviews r
    JOIN development_projects p ON r.project_id = p.project_id
    JOIN villages v ON p.village_id = v.village_id
    ORDER BY r.quality_rating DESC NULLS LAST
"#;

/// Build the bound pattern for a substring search.
///
/// The pattern is a parameter value, never spliced into the statement, so
/// metacharacters in `term` stay literal data.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contains_pattern_wraps_term() {
        assert_eq!(contains_pattern("rampur"), "%rampur%");
    }

    #[test]
    fn test_contains_pattern_keeps_metacharacters_literal() {
        // Quotes and SQL fragments survive as-is; binding keeps them data
        assert_eq!(contains_pattern("O'Brien"), "%O'Brien%");
        assert_eq!(
            contains_pattern("'; DROP TABLE villages;--"),
            "%'; DROP TABLE villages;--%"
        );
    }

    #[test]
    fn test_mutating_statements_bind_all_values() {
        // Every INSERT/UPDATE carries placeholders only, no inline literals
        // besides fixed lifecycle defaults
        for sql in [INSERT_VILLAGE, INSERT_COMPLAINT, INSERT_RESOURCE, INSERT_REVIEW] {
            assert!(sql.contains("$1"));
        }
        assert!(UPDATE_COMPLAINT_STATUS.contains("$1") && UPDATE_COMPLAINT_STATUS.contains("$2"));
    }
}
