//! Request/Response Shapes
//!
//! The two typed shapes that cross the backend boundary. Scraping results
//! stay untyped (`serde_json::Value`) because their layout belongs to the
//! backend and the dashboard only pretty-prints them.

use serde::{Deserialize, Serialize};

/// A club submitted for clustering: a unique human-readable name plus the
/// free-text description used as clustering input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub description: String,
}

/// Body of `POST /clustering/group-clubs`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubDataInput {
    pub clubs: Vec<Club>,
}

/// A club ranked within its cluster. `rank` is 1-based and unique within
/// the cluster; the engagement score is an opaque backend-owned number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedClub {
    pub rank: u32,
    pub name: String,
    pub total_engagement_score: f64,
}

/// A group of similar clubs. `cluster_id` is zero-based and unique within
/// one response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedCluster {
    pub cluster_id: u32,
    pub clubs: Vec<RankedClub>,
}

/// Response of `POST /clustering/group-clubs`. `outliers` holds the names
/// of clubs the backend could not assign to any cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    pub clusters: Vec<RankedCluster>,
    pub outliers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clustering_result_decodes_outlier_only_response() {
        let result: ClusteringResult =
            serde_json::from_str(r#"{"clusters": [], "outliers": ["Atwas"]}"#).unwrap();
        assert!(result.clusters.is_empty());
        assert_eq!(result.outliers, vec!["Atwas".to_string()]);
    }

    #[test]
    fn test_clustering_result_decodes_single_cluster() {
        let body = r#"{"clusters":[{"cluster_id":0,"clubs":[{"rank":1,"name":"Rhythm","total_engagement_score":0.5}]}],"outliers":[]}"#;
        let result: ClusteringResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.clusters.len(), 1);
        let cluster = &result.clusters[0];
        assert_eq!(cluster.cluster_id, 0);
        assert_eq!(cluster.clubs.len(), 1);
        assert_eq!(cluster.clubs[0].rank, 1);
        assert_eq!(cluster.clubs[0].name, "Rhythm");
        assert!((cluster.clubs[0].total_engagement_score - 0.5).abs() < f64::EPSILON);
        assert!(result.outliers.is_empty());
    }

    #[test]
    fn test_club_input_round_trips_field_names() {
        let input = ClubDataInput {
            clubs: vec![Club {
                name: "Omnia".to_string(),
                description: "Animal welfare and inclusivity".to_string(),
            }],
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["clubs"][0]["name"], "Omnia");
        assert_eq!(json["clubs"][0]["description"], "Animal welfare and inclusivity");
    }
}
