mod template_test;
