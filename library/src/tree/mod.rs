pub mod fenwick;
