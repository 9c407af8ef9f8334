//! Parallel Query Driver (§4.G): evaluate many queries independently
//! against a read-only Index Store, preserving input order.

use rayon::prelude::*;

use crate::error::Result;
use crate::server::Server;
use crate::types::{Document, Status};

impl Server {
    /// Evaluates each query in `queries` independently, in parallel, against
    /// the ACTUAL-status default predicate. Output position `i` corresponds
    /// to input position `i`, regardless of completion order. A single
    /// query's failure fails the whole call.
    pub fn process_queries<S>(&self, queries: &[S]) -> Result<Vec<Vec<Document>>>
    where
        S: AsRef<str> + Sync,
    {
        queries
            .par_iter()
            .map(|q| self.find_top_documents_status(q.as_ref(), Status::Actual, true))
            .collect()
    }

    /// As `process_queries`, but concatenated into one flat, order-preserving vector.
    pub fn process_queries_joined<S>(&self, queries: &[S]) -> Result<Vec<Document>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self.process_queries(queries)?.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_order_matches_per_query_order() {
        let mut s = Server::new_from_string("и в на").unwrap();
        s.add(0, "белый кот и модный ошейник", Status::Actual, &[8, -3]).unwrap();
        s.add(1, "пушистый кот пушистый хвост", Status::Actual, &[7]).unwrap();
        s.add(2, "ухоженный пёс выразительные глаза", Status::Actual, &[5]).unwrap();

        let queries = vec!["пушистый кот", "ухоженный пёс", "nonexistent"];
        let batched = s.process_queries(&queries).unwrap();
        for (i, q) in queries.iter().enumerate() {
            let direct = s.find_top_documents_status(q, Status::Actual, true).unwrap();
            assert_eq!(batched[i], direct);
        }
    }

    #[test]
    fn joined_concatenates_in_order() {
        let mut s = Server::new_from_string("и в на").unwrap();
        s.add(0, "белый кот", Status::Actual, &[1]).unwrap();
        s.add(1, "модный пёс", Status::Actual, &[2]).unwrap();

        let queries = vec!["кот", "пёс"];
        let joined = s.process_queries_joined(&queries).unwrap();
        let batched = s.process_queries(&queries).unwrap();
        let expected: Vec<Document> = batched.into_iter().flatten().collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn single_query_failure_fails_whole_batch() {
        let s = Server::new_from_string("and with").unwrap();
        let queries = vec!["fine", "--bad"];
        assert!(s.process_queries(&queries).is_err());
    }
}
