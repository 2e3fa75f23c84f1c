pub(crate) mod mesh;
