#![allow(dead_code)]

use rs_authorship_core::model::author::{Author, AuthorPair};

pub fn texts(raw: &[&str]) -> Vec<String> {
	raw.iter().map(|s| s.to_string()).collect()
}

/// Pair built from explicit partitions, no shuffling involved.
pub fn fixed_pair(first: Fixture, second: Fixture) -> AuthorPair {
	AuthorPair::new(
		Author::from_split(first.name, &texts(first.known), &texts(first.questioned)).unwrap(),
		Author::from_split(second.name, &texts(second.known), &texts(second.questioned)).unwrap(),
	)
	.unwrap()
}

/// An author with an explicit known/questioned partition.
pub struct Fixture<'a> {
	pub name: &'a str,
	pub known: &'a [&'a str],
	pub questioned: &'a [&'a str],
}

pub fn author<'a>(name: &'a str, known: &'a [&'a str], questioned: &'a [&'a str]) -> Fixture<'a> {
	Fixture { name, known, questioned }
}
