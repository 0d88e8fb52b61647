mod new_project;
mod project;
