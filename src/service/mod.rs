pub(crate) mod feedback;
