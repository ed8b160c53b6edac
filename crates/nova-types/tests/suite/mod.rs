mod minimal_jdk;
mod type_store;
