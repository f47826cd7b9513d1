//! End-to-end tests of the `hmap` core over real files.

#[cfg(test)]
mod util;
#[cfg(test)]
mod workflow;
