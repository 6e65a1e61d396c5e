use super::error::SearchFailure;
use super::params::QueryParams;
use super::response::SearchResponse;

/// The one capability the validator needs from a search backend.
pub trait SearchClient {
    fn search(&self, index_id: &str, params: &QueryParams) -> Result<SearchResponse, SearchFailure>;
}

impl<T: SearchClient + ?Sized> SearchClient for &T {
    fn search(&self, index_id: &str, params: &QueryParams) -> Result<SearchResponse, SearchFailure> {
        (**self).search(index_id, params)
    }
}

impl<T: SearchClient + ?Sized> SearchClient for Box<T> {
    fn search(&self, index_id: &str, params: &QueryParams) -> Result<SearchResponse, SearchFailure> {
        (**self).search(index_id, params)
    }
}
