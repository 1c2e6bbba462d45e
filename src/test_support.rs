//! Shared fixtures for unit tests.

/// A real-world debdiff: the libevent kinetic upload, trimmed to the
/// changelog and control file patches. The changelog hunk prepends the new
/// entry above the previous `2.1.12-stable-5` entry, so the first added
/// header line is the newest entry.
pub(crate) const LIBEVENT_DEBDIFF: &str = "\
diff -Nru libevent-2.1.12-stable/debian/changelog libevent-2.1.12-stable/debian/changelog
--- libevent-2.1.12-stable/debian/changelog\t2022-04-15 17:26:52.000000000 +0200
+++ libevent-2.1.12-stable/debian/changelog\t2022-10-05 19:13:56.000000000 +0200
@@ -1,3 +1,10 @@
+libevent (2.1.12-stable-5ubuntu1) kinetic; urgency=medium
+
+  * Bump soname for libevent and libevent-core to 2.1-7a for dropping
+    evutil_secure_rng_add_bytes (LP: #1990941)
+
+ -- Benjamin Drung <bdrung@ubuntu.com>  Wed, 05 Oct 2022 19:13:56 +0200
+
 libevent (2.1.12-stable-5) unstable; urgency=medium

   * d/control: Update maintainer
diff -Nru libevent-2.1.12-stable/debian/control libevent-2.1.12-stable/debian/control
--- libevent-2.1.12-stable/debian/control\t2022-04-15 17:26:42.000000000 +0200
+++ libevent-2.1.12-stable/debian/control\t2022-10-05 19:07:42.000000000 +0200
@@ -1,5 +1,6 @@
 Source: libevent
-Maintainer: Nicolas Mora <babelouest@debian.org>
+Maintainer: Ubuntu Developers <ubuntu-devel-discuss@lists.ubuntu.com>
+XSBC-Original-Maintainer: Nicolas Mora <babelouest@debian.org>
 Section: libs
 Priority: optional
 Build-Depends: debhelper-compat (= 13),
";
